//! # Gate Contract
//!
//! This module defines the core [`Gate`] trait plus the pieces every gate
//! implementation shares: the [`BaseGate`] identity/port holder, the
//! [`PortMap`] name→role lookup, the [`OutputLatch`] change detector, and the
//! [`GateContext`] a gate sees while handling an event.
//!
//! ## Design
//!
//! A gate is a plain state machine: the simulator calls `signal_received`,
//! `tick`, `tool_used`, or `packet_received`, and the gate pushes effects
//! (signal emissions, radio broadcasts, display updates) into the context.
//! The simulator applies the effects afterwards, so no gate ever re-enters
//! another while handling its own event.
//!
//! ## Change detection
//!
//! A gate must never emit on a source port unless the value differs from the
//! last value emitted on that port; this is what keeps feedback loops from
//! becoming storms. [`OutputLatch`] enforces the rule in one place; every
//! gate routes its emissions through one latch per source port.

use crate::radio::RadioPacket;
use crate::signal::SignalValue;
use std::time::Duration;

/// The two generic tool interactions on a gate.
///
/// The screwdriver cycles a gate's discrete setting (arithmetic operation,
/// delay mode, NOT empty-policy, radio channel); the multitool edge-toggles
/// the relay's active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
  /// Cycles the gate's discrete configuration setting.
  Screwdriver,
  /// Manually toggles state (power relay).
  Multitool,
}

/// An effect a gate requests while handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
  /// Emit a signal on one of the gate's source ports.
  Signal {
    /// Source port name.
    port: String,
    /// The value to put on the wire; `Empty` is a valid emission.
    value: SignalValue,
  },
  /// Broadcast a packet on the shared radio medium.
  Broadcast(RadioPacket),
  /// Replace the gate's display surface text.
  Display(String),
}

/// What a gate sees while handling one event.
///
/// Carries the simulation clock, the effect collector, and the power reading
/// resolved for this gate (relay only; `None` for everything else or when no
/// power source is attached).
pub struct GateContext<'a> {
  now: Duration,
  effects: &'a mut Vec<Effect>,
  load_demand: Option<f32>,
}

impl<'a> GateContext<'a> {
  /// Creates a context for one event dispatch.
  pub(crate) fn new(
    now: Duration,
    effects: &'a mut Vec<Effect>,
    load_demand: Option<f32>,
  ) -> Self {
    Self {
      now,
      effects,
      load_demand,
    }
  }

  /// Current simulation time (monotonic, starts at zero).
  pub fn now(&self) -> Duration {
    self.now
  }

  /// Queues a signal emission on a source port.
  ///
  /// Prefer [`OutputLatch::send`], which applies change detection before
  /// calling this.
  pub fn emit(&mut self, port: &str, value: SignalValue) {
    self.effects.push(Effect::Signal {
      port: port.to_string(),
      value,
    });
  }

  /// Queues a radio broadcast.
  pub fn broadcast(&mut self, packet: RadioPacket) {
    self.effects.push(Effect::Broadcast(packet));
  }

  /// Queues a display surface update.
  pub fn set_display(&mut self, text: impl Into<String>) {
    self.effects.push(Effect::Display(text.into()));
  }

  /// The load demand resolved for this gate, when a power source is attached.
  pub fn load_demand(&self) -> Option<f32> {
    self.load_demand
  }
}

/// One gate instance hosted on a node.
///
/// All methods are called serialized by the simulator: no two gate
/// evaluations, and no gate's own tick and callback, ever run concurrently.
pub trait Gate: Send {
  /// Returns the gate's node name.
  fn name(&self) -> &str;

  /// Sets the gate's node name.
  fn set_name(&mut self, name: &str);

  /// Returns the names of all sink (input) ports, reflecting current
  /// configuration.
  fn input_port_names(&self) -> &[String];

  /// Returns the names of all source (output) ports.
  fn output_port_names(&self) -> &[String];

  /// Checks if this gate has a sink port with the given name.
  fn has_input_port(&self, name: &str) -> bool {
    self.input_port_names().iter().any(|p| p == name)
  }

  /// Checks if this gate has a source port with the given name.
  fn has_output_port(&self, name: &str) -> bool {
    self.output_port_names().iter().any(|p| p == name)
  }

  /// Handles a signal delivered to one of the gate's sink ports.
  ///
  /// A port name the gate does not recognize is a silent no-op.
  fn signal_received(&mut self, port: &str, signal: SignalValue, ctx: &mut GateContext<'_>);

  /// Advances timed logic by one tick. Most gates have none.
  fn tick(&mut self, _ctx: &mut GateContext<'_>) {}

  /// Handles a tool interaction. Gates without settings ignore it.
  fn tool_used(&mut self, _tool: Tool, _ctx: &mut GateContext<'_>) {}

  /// Handles a radio packet. Only wireless gates listen.
  fn packet_received(&mut self, _packet: &RadioPacket, _ctx: &mut GateContext<'_>) {}
}

/// Shared identity and port bookkeeping for gate implementations.
pub struct BaseGate {
  name: String,
  input_port_names: Vec<String>,
  output_port_names: Vec<String>,
}

impl BaseGate {
  /// Creates a base with the given name and port names.
  pub fn new(name: String, input_port_names: Vec<String>, output_port_names: Vec<String>) -> Self {
    Self {
      name,
      input_port_names,
      output_port_names,
    }
  }

  /// Returns the gate's name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Sets the gate's name.
  pub fn set_name(&mut self, name: &str) {
    self.name = name.to_string();
  }

  /// Returns the list of sink port names.
  pub fn input_port_names(&self) -> &[String] {
    &self.input_port_names
  }

  /// Returns the list of source port names.
  pub fn output_port_names(&self) -> &[String] {
    &self.output_port_names
  }

  /// Replaces the sink port list after a reconfiguration.
  pub fn set_input_port_names(&mut self, names: Vec<String>) {
    self.input_port_names = names;
  }
}

/// Name→role lookup for a gate's ports.
///
/// Ports stay runtime-renamable strings on the wire, but gates dispatch on an
/// enumerated role resolved through this table instead of comparing strings
/// inline at every branch.
pub struct PortMap<R: Copy> {
  entries: Vec<(String, R)>,
}

impl<R: Copy> PortMap<R> {
  /// Builds a lookup table from `(name, role)` pairs.
  pub fn new(entries: Vec<(String, R)>) -> Self {
    Self { entries }
  }

  /// Resolves a port name to its role, or `None` for unrecognized ports.
  pub fn role(&self, port: &str) -> Option<R> {
    self
      .entries
      .iter()
      .find(|(name, _)| name == port)
      .map(|(_, role)| *role)
  }
}

/// Last-emitted-value latch for one source port.
///
/// `send` forwards a value to the context only when it differs from the last
/// value that went out on this port. A latch can be seeded so a gate whose
/// steady output equals the seed stays silent at startup.
#[derive(Debug, Clone)]
pub struct OutputLatch {
  last: SignalValue,
}

impl OutputLatch {
  /// Creates a latch whose last value is `Empty`.
  pub fn new() -> Self {
    Self {
      last: SignalValue::Empty,
    }
  }

  /// Creates a latch seeded with an initial value.
  pub fn seeded(value: SignalValue) -> Self {
    Self { last: value }
  }

  /// Emits `value` on `port` unless it equals the last emitted value.
  ///
  /// Returns true when something actually went on the wire.
  pub fn send(&mut self, ctx: &mut GateContext<'_>, port: &str, value: SignalValue) -> bool {
    if self.last == value {
      return false;
    }
    self.last = value.clone();
    ctx.emit(port, value);
    true
  }

  /// The last value emitted on this port.
  pub fn last(&self) -> &SignalValue {
    &self.last
  }
}

impl Default for OutputLatch {
  fn default() -> Self {
    Self::new()
  }
}
