//! # Wire Payload
//!
//! This module defines the serializable payload that crosses links and the
//! radio transport. Gates never see payloads; the simulator encodes a
//! [`SignalValue`] into a [`SignalPayload`] on send and decodes it back on
//! delivery, so every hop goes through the wire format.
//!
//! ## Decode precedence
//!
//! 1. `empty` flag set → empty signal.
//! 2. `string_data` present → string signal.
//! 3. `numeric_data` present → numeric signal.
//! 4. Otherwise fall back to the legacy boolean `state`.

use crate::signal::SignalValue;
use serde::{Deserialize, Serialize};

/// Legacy boolean signal state, kept for compatibility with links that only
/// carry high/low levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignalState {
  /// Signal is asserted.
  High,
  /// Signal is deasserted.
  #[default]
  Low,
  /// Brief assertion; treated as high when decoding.
  Momentary,
}

/// The payload carried on a link for one signal delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPayload {
  /// Legacy boolean state, derived from truthiness on encode.
  pub state: SignalState,
  /// Whether the signal is empty (no signal present).
  pub empty: bool,
  /// String representation, when non-empty.
  pub string_data: Option<String>,
  /// Parsed numeric value, when the string parses as a number.
  pub numeric_data: Option<f32>,
}

impl SignalPayload {
  /// Encodes a signal value into its wire form.
  pub fn from_value(value: &SignalValue) -> Self {
    match value {
      SignalValue::Empty => SignalPayload {
        state: SignalState::Low,
        empty: true,
        string_data: None,
        numeric_data: None,
      },
      SignalValue::Value { text, numeric } => SignalPayload {
        state: if value.is_truthy() {
          SignalState::High
        } else {
          SignalState::Low
        },
        empty: false,
        string_data: Some(text.clone()),
        numeric_data: *numeric,
      },
    }
  }

  /// Decodes the wire form back into a signal value, applying the documented
  /// field precedence.
  pub fn to_value(&self) -> SignalValue {
    if self.empty {
      return SignalValue::empty();
    }
    if let Some(text) = &self.string_data {
      return SignalValue::string(text.clone());
    }
    if let Some(numeric) = self.numeric_data {
      return SignalValue::numeric(numeric);
    }
    match self.state {
      SignalState::High | SignalState::Momentary => SignalValue::boolean(true),
      SignalState::Low => SignalValue::boolean(false),
    }
  }

  /// Encodes an empty-signal payload.
  pub fn empty() -> Self {
    Self::from_value(&SignalValue::empty())
  }
}
