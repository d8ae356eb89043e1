//! # EQUALS Gate
//!
//! Compares two inputs and outputs a configurable success or failure value.
//!
//! ## Ports
//!
//! - **Input**: `"InputA"`, `"InputB"` - the two signals to compare
//! - **Output**: `"Output"` - the success value on match, the failure value otherwise
//!
//! ## Behavior
//!
//! When both inputs are empty the output is empty, regardless of the
//! configured success/failure strings. Otherwise signal equality decides:
//! a blank success or failure string maps to an empty output.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap};
use crate::signal::SignalValue;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  InputA,
  InputB,
}

/// A gate that outputs a success/failure value from comparing two inputs.
pub struct EqualsGate {
  base: BaseGate,
  ports: PortMap<PortRole>,
  success_output: String,
  failure_output: String,
  last_a: SignalValue,
  last_b: SignalValue,
  output: OutputLatch,
}

impl EqualsGate {
  /// Creates an EQUALS gate with ports `InputA`/`InputB` → `Output` and the
  /// default outputs `"1"` on success, blank (empty signal) on failure.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec!["InputA".to_string(), "InputB".to_string()],
        vec!["Output".to_string()],
      ),
      ports: PortMap::new(vec![
        ("InputA".to_string(), PortRole::InputA),
        ("InputB".to_string(), PortRole::InputB),
      ]),
      success_output: "1".to_string(),
      failure_output: String::new(),
      last_a: SignalValue::Empty,
      last_b: SignalValue::Empty,
      output: OutputLatch::new(),
    }
  }

  /// Sets the value emitted on a successful comparison; blank means empty.
  pub fn with_success_output(mut self, value: impl Into<String>) -> Self {
    self.success_output = value.into();
    self
  }

  /// Sets the value emitted on a failed comparison; blank means empty.
  pub fn with_failure_output(mut self, value: impl Into<String>) -> Self {
    self.failure_output = value.into();
    self
  }

  fn update_output(&mut self, ctx: &mut GateContext<'_>) {
    let output = if self.last_a.is_empty() && self.last_b.is_empty() {
      SignalValue::empty()
    } else {
      let configured = if self.last_a == self.last_b {
        &self.success_output
      } else {
        &self.failure_output
      };
      if configured.is_empty() {
        SignalValue::empty()
      } else {
        SignalValue::string(configured.clone())
      }
    };
    self.output.send(ctx, "Output", output);
  }
}

impl Gate for EqualsGate {
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
    match self.ports.role(port) {
      Some(PortRole::InputA) => self.last_a = signal,
      Some(PortRole::InputB) => self.last_b = signal,
      None => return,
    }
    self.update_output(ctx);
  }
}
