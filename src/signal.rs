//! # Signal Values
//!
//! This module defines [`SignalValue`], the one value type that crosses every
//! port in the circuit. A signal is either empty (no signal present) or a
//! value carrying a string representation plus an optional parsed numeric.
//!
//! ## Equality
//!
//! - Two empty signals are equal.
//! - An empty signal never equals a non-empty one.
//! - Two non-empty signals are equal iff their string representations match.
//!
//! ## Truthiness
//!
//! - Empty is false.
//! - `"0"` and the empty string are false.
//! - Everything else is true.

use std::fmt;

/// A typed signal exchanged between gates.
///
/// Every gate input and output is a `SignalValue`. The numeric component is
/// derived from the string form at construction time and cached, so gates
/// that need arithmetic never re-parse.
#[derive(Debug, Clone, Default)]
pub enum SignalValue {
  /// No signal present on the wire.
  #[default]
  Empty,
  /// A concrete signal value.
  Value {
    /// Canonical string representation of the signal.
    text: String,
    /// Parsed numeric value, when the string parses as a number.
    numeric: Option<f32>,
  },
}

impl SignalValue {
  /// Creates an empty signal.
  pub fn empty() -> Self {
    SignalValue::Empty
  }

  /// Creates a signal from a string, parsing the numeric component if possible.
  pub fn string(value: impl Into<String>) -> Self {
    let text = value.into();
    let numeric = parse_numeric(&text);
    SignalValue::Value { text, numeric }
  }

  /// Creates a numeric signal.
  ///
  /// The string form is rendered with up to seven decimal places, trailing
  /// zeros trimmed, so `5.0` renders as `"5"` and `0.5` as `"0.5"`.
  pub fn numeric(value: f32) -> Self {
    SignalValue::Value {
      text: render_numeric(value),
      numeric: Some(value),
    }
  }

  /// Creates a boolean signal: `"1"` for true, `"0"` for false.
  pub fn boolean(value: bool) -> Self {
    SignalValue::Value {
      text: if value { "1" } else { "0" }.to_string(),
      numeric: Some(if value { 1.0 } else { 0.0 }),
    }
  }

  /// Returns true when no signal is present.
  pub fn is_empty(&self) -> bool {
    matches!(self, SignalValue::Empty)
  }

  /// Returns the string representation; the empty string for empty signals.
  pub fn text(&self) -> &str {
    match self {
      SignalValue::Empty => "",
      SignalValue::Value { text, .. } => text,
    }
  }

  /// Returns the numeric value, falling back to `0.0` for empty signals and
  /// non-numeric strings.
  pub fn numeric_value(&self) -> f32 {
    match self {
      SignalValue::Empty => 0.0,
      SignalValue::Value { numeric, .. } => numeric.unwrap_or(0.0),
    }
  }

  /// Returns the truthiness of the signal.
  ///
  /// Empty, `"0"`, and the empty string are false; everything else is true.
  pub fn is_truthy(&self) -> bool {
    match self {
      SignalValue::Empty => false,
      SignalValue::Value { text, .. } => !text.is_empty() && text != "0",
    }
  }
}

impl PartialEq for SignalValue {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (SignalValue::Empty, SignalValue::Empty) => true,
      (SignalValue::Empty, _) | (_, SignalValue::Empty) => false,
      (SignalValue::Value { text: a, .. }, SignalValue::Value { text: b, .. }) => a == b,
    }
  }
}

impl fmt::Display for SignalValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SignalValue::Empty => write!(f, "<empty>"),
      SignalValue::Value { text, .. } => write!(f, "{}", text),
    }
  }
}

/// Parses the numeric component of a signal string.
///
/// Accepts leading and trailing decimal points (`".5"`, `"2."`), which
/// `f32::from_str` already handles. Returns `None` for the empty string and
/// anything that does not parse.
fn parse_numeric(text: &str) -> Option<f32> {
  if text.is_empty() {
    return None;
  }
  text.parse::<f32>().ok()
}

/// Renders a numeric value as its canonical signal string.
fn render_numeric(value: f32) -> String {
  let rendered = format!("{:.7}", value);
  let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
  if trimmed.is_empty() || trimmed == "-" {
    "0".to_string()
  } else {
    trimmed.to_string()
  }
}
