//! Test-only helpers for exercising gates directly and inside a simulator.

use crate::gate::{BaseGate, Effect, Gate, GateContext, Tool};
use crate::radio::RadioPacket;
use crate::signal::SignalValue;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Delivers one signal to a gate and returns the effects it produced.
pub fn deliver(gate: &mut dyn Gate, port: &str, value: SignalValue, now: Duration) -> Vec<Effect> {
  let mut effects = Vec::new();
  let mut ctx = GateContext::new(now, &mut effects, None);
  gate.signal_received(port, value, &mut ctx);
  effects
}

/// Ticks a gate once and returns the effects it produced.
pub fn tick(gate: &mut dyn Gate, now: Duration) -> Vec<Effect> {
  tick_with_demand(gate, now, None)
}

/// Ticks a gate with a power reading and returns the effects it produced.
pub fn tick_with_demand(gate: &mut dyn Gate, now: Duration, demand: Option<f32>) -> Vec<Effect> {
  let mut effects = Vec::new();
  let mut ctx = GateContext::new(now, &mut effects, demand);
  gate.tick(&mut ctx);
  effects
}

/// Applies a tool to a gate and returns the effects it produced.
pub fn use_tool(gate: &mut dyn Gate, tool: Tool, now: Duration) -> Vec<Effect> {
  let mut effects = Vec::new();
  let mut ctx = GateContext::new(now, &mut effects, None);
  gate.tool_used(tool, &mut ctx);
  effects
}

/// Delivers a radio packet to a gate and returns the effects it produced.
pub fn receive_packet(gate: &mut dyn Gate, packet: &RadioPacket, now: Duration) -> Vec<Effect> {
  let mut effects = Vec::new();
  let mut ctx = GateContext::new(now, &mut effects, None);
  gate.packet_received(packet, &mut ctx);
  effects
}

/// The value emitted on a port, if the effects contain exactly one such
/// emission.
pub fn signal_on(effects: &[Effect], port: &str) -> Option<SignalValue> {
  let mut found = None;
  for effect in effects {
    if let Effect::Signal { port: p, value } = effect {
      if p == port {
        assert!(found.is_none(), "multiple emissions on port {port}");
        found = Some(value.clone());
      }
    }
  }
  found
}

/// Shared recording of every signal a [`Probe`] receives, in delivery order.
pub type ProbeLog = Arc<Mutex<Vec<SignalValue>>>;

/// A sink gate that records every signal delivered to its `Input` port.
pub struct Probe {
  base: BaseGate,
  log: ProbeLog,
}

impl Probe {
  /// Creates a probe and the shared log it records into.
  pub fn new(name: impl Into<String>) -> (Self, ProbeLog) {
    let log: ProbeLog = Arc::new(Mutex::new(Vec::new()));
    let probe = Self {
      base: BaseGate::new(name.into(), vec!["Input".to_string()], Vec::new()),
      log: Arc::clone(&log),
    };
    (probe, log)
  }
}

impl Gate for Probe {
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
    if port == "Input" {
      self.log.lock().unwrap().push(signal);
    }
  }
}

/// Drains a probe log into an owned vector.
pub fn drain(log: &ProbeLog) -> Vec<SignalValue> {
  std::mem::take(&mut *log.lock().unwrap())
}
