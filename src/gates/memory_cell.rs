//! # Memory Cell
//!
//! A lockable one-value register that republishes its contents every tick.
//!
//! ## Ports
//!
//! - **Input**: `"MemoryInput"` - the value to store, `"LockState"` - the write lock
//! - **Output**: `"Output"` - the stored value, as a string signal
//!
//! ## Behavior
//!
//! While accepting (the default), any non-empty `MemoryInput` replaces the
//! stored string; empty data inputs leave it untouched, so the cell cannot be
//! blanked through the data port. A `LockState` of `"1"` unlocks writes, any
//! other non-empty value locks them, and an empty lock signal changes
//! nothing. The output is refreshed on every tick through a change latch
//! seeded with the initial empty string, so a freshly wired cell stays silent
//! until its contents first change.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap};
use crate::signal::SignalValue;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  MemoryInput,
  LockState,
}

/// A gate that stores one string value behind a write lock.
pub struct MemoryCell {
  base: BaseGate,
  ports: PortMap<PortRole>,
  stored: String,
  accepting: bool,
  output: OutputLatch,
}

impl MemoryCell {
  /// Creates a memory cell with ports `MemoryInput`/`LockState` → `Output`,
  /// an empty stored value, and writes unlocked.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec!["MemoryInput".to_string(), "LockState".to_string()],
        vec!["Output".to_string()],
      ),
      ports: PortMap::new(vec![
        ("MemoryInput".to_string(), PortRole::MemoryInput),
        ("LockState".to_string(), PortRole::LockState),
      ]),
      stored: String::new(),
      accepting: true,
      output: OutputLatch::seeded(SignalValue::string("")),
    }
  }

  /// Seeds the stored value. The output latch is reseeded to match, so a
  /// pre-loaded cell is as silent at startup as a fresh one.
  pub fn with_stored(mut self, value: impl Into<String>) -> Self {
    self.stored = value.into();
    self.output = OutputLatch::seeded(SignalValue::string(self.stored.clone()));
    self
  }

  /// The currently stored value.
  pub fn stored(&self) -> &str {
    &self.stored
  }

  /// Whether writes through `MemoryInput` are currently accepted.
  pub fn accepting(&self) -> bool {
    self.accepting
  }
}

impl Gate for MemoryCell {
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

  fn signal_received(&mut self, port: &str, signal: SignalValue, _ctx: &mut GateContext<'_>) {
    match self.ports.role(port) {
      Some(PortRole::MemoryInput) => {
        if self.accepting && !signal.is_empty() {
          self.stored = signal.text().to_string();
          trace!(gate = %self.base.name(), stored = %self.stored, "value stored");
        }
      }
      Some(PortRole::LockState) => {
        if !signal.is_empty() {
          self.accepting = signal.text() == "1";
        }
      }
      None => {}
    }
  }

  fn tick(&mut self, ctx: &mut GateContext<'_>) {
    let value = SignalValue::string(self.stored.clone());
    self.output.send(ctx, "Output", value);
  }
}
