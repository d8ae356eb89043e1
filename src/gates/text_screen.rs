//! # Text Screen
//!
//! A display surface driven by a single signal input.
//!
//! ## Ports
//!
//! - **Input**: `"Input"` - the text to show
//!
//! ## Behavior
//!
//! A non-empty input replaces the whole display text, truncated to 256
//! characters. Empty inputs are ignored, so the screen holds its last text
//! rather than blanking.

use crate::gate::{BaseGate, Gate, GateContext, PortMap};
use crate::signal::SignalValue;

/// Longest text the screen will hold; longer inputs are cut at this many chars.
const MAX_TEXT_LENGTH: usize = 256;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  Input,
}

/// A gate that shows the last non-empty text it received.
pub struct TextScreen {
  base: BaseGate,
  ports: PortMap<PortRole>,
  text: String,
}

impl TextScreen {
  /// Creates a blank screen with the single port `Input`.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(name.into(), vec!["Input".to_string()], Vec::new()),
      ports: PortMap::new(vec![("Input".to_string(), PortRole::Input)]),
      text: String::new(),
    }
  }

  /// The text currently shown.
  pub fn text(&self) -> &str {
    &self.text
  }
}

impl Gate for TextScreen {
  fn name(&self) -> &str {
    self.base.name()
  }

  fn set_name(&mut self, name: &str) {
    self.base.set_name(name);
  }

  fn input_port_names(&self) -> &[String] {
    self.base.input_port_names()
  }

  fn output_port_names(&self) -> &[String] {
    self.base.output_port_names()
  }

  fn signal_received(&mut self, port: &str, signal: SignalValue, ctx: &mut GateContext<'_>) {
    let Some(PortRole::Input) = self.ports.role(port) else {
      return;
    };
    if signal.is_empty() {
      return;
    }
    self.text = signal.text().chars().take(MAX_TEXT_LENGTH).collect();
    ctx.set_display(self.text.clone());
  }
}
