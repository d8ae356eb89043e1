//! # Power Relay
//!
//! A switchable relay that gates two signal paths and a power feed together.
//!
//! ## Ports
//!
//! - **Input**: `"Toggle"`, `"SetState"` - control, `"SignalInputA"`,
//!   `"SignalInputB"` - the pass-through pair
//! - **Output**: `"StateOutput"` - `"1"`/`"0"` active flag, `"SignalOutputA"`,
//!   `"SignalOutputB"` - the gated pass-through, `"LoadOutput"` - downstream
//!   demand, `"PowerOutput"` - power actually flowing
//!
//! ## Behavior
//!
//! A truthy `Toggle` flips the active state; `SetState` forces it to the
//! value of the `"1"` comparison; empty control signals are ignored. While
//! inactive both signal outputs are empty and the power flow is zero. While
//! active each signal output mirrors its input and the power flow is the
//! downstream demand clamped to `max_power_flow`. Load and power outputs are
//! refreshed per tick from the attached power source; with no source attached
//! they keep their last values for the tick. All five outputs sit behind
//! latches seeded with the startup values, so an untouched relay is silent.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap, Tool};
use crate::signal::SignalValue;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  Toggle,
  SetState,
  SignalInputA,
  SignalInputB,
}

/// A gate that switches two signal paths and a power feed on and off together.
pub struct PowerRelay {
  base: BaseGate,
  ports: PortMap<PortRole>,
  is_active: bool,
  max_power_flow: f32,
  last_a: SignalValue,
  last_b: SignalValue,
  state_output: OutputLatch,
  signal_out_a: OutputLatch,
  signal_out_b: OutputLatch,
  load_output: OutputLatch,
  power_output: OutputLatch,
}

impl PowerRelay {
  /// Creates an inactive relay with a 1000 W power ceiling.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec![
          "Toggle".to_string(),
          "SetState".to_string(),
          "SignalInputA".to_string(),
          "SignalInputB".to_string(),
        ],
        vec![
          "StateOutput".to_string(),
          "SignalOutputA".to_string(),
          "SignalOutputB".to_string(),
          "LoadOutput".to_string(),
          "PowerOutput".to_string(),
        ],
      ),
      ports: PortMap::new(vec![
        ("Toggle".to_string(), PortRole::Toggle),
        ("SetState".to_string(), PortRole::SetState),
        ("SignalInputA".to_string(), PortRole::SignalInputA),
        ("SignalInputB".to_string(), PortRole::SignalInputB),
      ]),
      is_active: false,
      max_power_flow: 1000.0,
      last_a: SignalValue::Empty,
      last_b: SignalValue::Empty,
      state_output: OutputLatch::seeded(SignalValue::boolean(false)),
      signal_out_a: OutputLatch::new(),
      signal_out_b: OutputLatch::new(),
      load_output: OutputLatch::seeded(SignalValue::numeric(0.0)),
      power_output: OutputLatch::seeded(SignalValue::numeric(0.0)),
    }
  }

  /// Sets how much power the relay lets through while active.
  pub fn with_max_power_flow(mut self, watts: f32) -> Self {
    self.max_power_flow = watts;
    self
  }

  /// Whether the relay currently passes signals and power.
  pub fn is_active(&self) -> bool {
    self.is_active
  }

  fn set_active(&mut self, active: bool, ctx: &mut GateContext<'_>) {
    self.is_active = active;
    debug!(gate = %self.base.name(), active, "relay switched");
    self.update_outputs(ctx);
  }

  fn update_outputs(&mut self, ctx: &mut GateContext<'_>) {
    self
      .state_output
      .send(ctx, "StateOutput", SignalValue::boolean(self.is_active));

    let (out_a, out_b) = if self.is_active {
      (self.last_a.clone(), self.last_b.clone())
    } else {
      (SignalValue::empty(), SignalValue::empty())
    };
    self.signal_out_a.send(ctx, "SignalOutputA", out_a);
    self.signal_out_b.send(ctx, "SignalOutputB", out_b);

    // Without an attached power source there is no load reading this tick;
    // the load and power outputs keep their previous values.
    if let Some(demand) = ctx.load_demand() {
      self
        .load_output
        .send(ctx, "LoadOutput", SignalValue::numeric(demand));
      let flowing = if self.is_active {
        demand.min(self.max_power_flow)
      } else {
        0.0
      };
      self
        .power_output
        .send(ctx, "PowerOutput", SignalValue::numeric(flowing));
    }
  }
}

impl Gate for PowerRelay {
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
      Some(PortRole::Toggle) => {
        if !signal.is_empty() && signal.text() != "0" {
          self.set_active(!self.is_active, ctx);
        }
      }
      Some(PortRole::SetState) => {
        if !signal.is_empty() {
          let active = signal.text() == "1";
          self.set_active(active, ctx);
        }
      }
      Some(PortRole::SignalInputA) => {
        self.last_a = signal;
        self.update_outputs(ctx);
      }
      Some(PortRole::SignalInputB) => {
        self.last_b = signal;
        self.update_outputs(ctx);
      }
      None => {}
    }
  }

  fn tick(&mut self, ctx: &mut GateContext<'_>) {
    self.update_outputs(ctx);
  }

  fn tool_used(&mut self, tool: Tool, ctx: &mut GateContext<'_>) {
    if tool != Tool::Multitool {
      return;
    }
    self.set_active(!self.is_active, ctx);
  }
}
