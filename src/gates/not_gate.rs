//! # NOT Gate
//!
//! Inverts the truthiness of its input.
//!
//! ## Ports
//!
//! - **Input**: `"Input"` - the signal to invert
//! - **Output**: `"Output"` - `"0"` for a truthy input, `"1"` for a falsy one
//!
//! ## Behavior
//!
//! Empty input is policy-dependent: with `treat_empty_as_false` off (the
//! default) an empty input produces an empty output; with it on, empty counts
//! as false and the gate outputs `"1"`. The screwdriver toggles the policy
//! and re-evaluates immediately.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap, Tool};
use crate::signal::SignalValue;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  Input,
}

/// A gate that outputs the inverted truthiness of its input.
pub struct NotGate {
  base: BaseGate,
  ports: PortMap<PortRole>,
  treat_empty_as_false: bool,
  last_input: SignalValue,
  output: OutputLatch,
}

impl NotGate {
  /// Creates a NOT gate with the default ports `Input` → `Output`.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec!["Input".to_string()],
        vec!["Output".to_string()],
      ),
      ports: PortMap::new(vec![("Input".to_string(), PortRole::Input)]),
      treat_empty_as_false: false,
      last_input: SignalValue::Empty,
      output: OutputLatch::new(),
    }
  }

  /// Sets the empty-input policy: when true, empty input counts as false and
  /// inverts to `"1"`.
  pub fn with_treat_empty_as_false(mut self, value: bool) -> Self {
    self.treat_empty_as_false = value;
    self
  }

  /// Returns the current empty-input policy.
  pub fn treat_empty_as_false(&self) -> bool {
    self.treat_empty_as_false
  }

  fn update_output(&mut self, ctx: &mut GateContext<'_>) {
    let output = if self.last_input.is_empty() {
      if self.treat_empty_as_false {
        SignalValue::string("1")
      } else {
        SignalValue::empty()
      }
    } else if self.last_input.is_truthy() {
      SignalValue::string("0")
    } else {
      SignalValue::string("1")
    };
    self.output.send(ctx, "Output", output);
  }
}

impl Gate for NotGate {
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
    self.last_input = signal;
    self.update_output(ctx);
  }

  fn tool_used(&mut self, tool: Tool, ctx: &mut GateContext<'_>) {
    if tool != Tool::Screwdriver {
      return;
    }
    self.treat_empty_as_false = !self.treat_empty_as_false;
    debug!(
      gate = %self.base.name(),
      treat_empty_as_false = self.treat_empty_as_false,
      "empty-input policy toggled"
    );
    self.update_output(ctx);
  }
}
