//! # Wifi Gate
//!
//! A half-duplex radio transceiver bridging wired links and the shared
//! broadcast medium.
//!
//! ## Ports
//!
//! - **Input**: `"Input"` - data to transmit, `"SetTarget"` - the match target
//! - **Output**: `"Output"` - the receive comparison result
//!
//! ## Behavior
//!
//! A non-empty `Input` transmits its text on the gate's channel and freezes
//! reception until an empty `Input` arrives; the wired output is cleared on
//! transmit. While receiving, a packet on the gate's channel compares its
//! data against the target: a match emits the success value, a mismatch the
//! failure value, a blank configured value maps to empty. Packets on other
//! channels are ignored entirely. The screwdriver steps the channel through
//! 1..=10, wrapping.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap, Tool};
use crate::radio::{self, RadioPacket};
use crate::signal::SignalValue;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
enum PortRole {
  Input,
  SetTarget,
}

/// A gate that transmits wired signals over radio and matches received packets.
pub struct WifiGate {
  base: BaseGate,
  ports: PortMap<PortRole>,
  channel: u8,
  target: String,
  success_output: String,
  failure_output: String,
  receiving: bool,
  output: OutputLatch,
}

impl WifiGate {
  /// Creates a transceiver on channel 1 with target `"1"`, success output
  /// `"1"`, failure output `"0"`, and reception enabled.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec!["Input".to_string(), "SetTarget".to_string()],
        vec!["Output".to_string()],
      ),
      ports: PortMap::new(vec![
        ("Input".to_string(), PortRole::Input),
        ("SetTarget".to_string(), PortRole::SetTarget),
      ]),
      channel: radio::MIN_CHANNEL,
      target: "1".to_string(),
      success_output: "1".to_string(),
      failure_output: "0".to_string(),
      receiving: true,
      output: OutputLatch::new(),
    }
  }

  /// Sets the radio channel.
  pub fn with_channel(mut self, channel: u8) -> Self {
    self.channel = channel;
    self
  }

  /// Sets the target the received data is matched against.
  pub fn with_target(mut self, target: impl Into<String>) -> Self {
    self.target = target.into();
    self
  }

  /// Sets the value emitted on a matching packet; blank means empty.
  pub fn with_success_output(mut self, value: impl Into<String>) -> Self {
    self.success_output = value.into();
    self
  }

  /// Sets the value emitted on a mismatching packet; blank means empty.
  pub fn with_failure_output(mut self, value: impl Into<String>) -> Self {
    self.failure_output = value.into();
    self
  }

  /// The current radio channel.
  pub fn channel(&self) -> u8 {
    self.channel
  }

  /// Whether the gate is currently listening.
  pub fn receiving(&self) -> bool {
    self.receiving
  }
}

impl Gate for WifiGate {
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
      Some(PortRole::Input) => {
        if signal.is_empty() {
          self.receiving = true;
        } else {
          self.receiving = false;
          let data = signal.text().to_string();
          debug!(gate = %self.base.name(), channel = self.channel, %data, "transmitting");
          ctx.broadcast(RadioPacket::new(self.channel, data));
          self.output.send(ctx, "Output", SignalValue::empty());
        }
      }
      Some(PortRole::SetTarget) => {
        if !signal.is_empty() {
          self.target = signal.text().to_string();
        }
      }
      None => {}
    }
  }

  fn packet_received(&mut self, packet: &RadioPacket, ctx: &mut GateContext<'_>) {
    if !self.receiving || packet.channel != self.channel {
      return;
    }
    let configured = if packet.data == self.target {
      &self.success_output
    } else {
      &self.failure_output
    };
    let output = if configured.is_empty() {
      SignalValue::empty()
    } else {
      SignalValue::string(configured.clone())
    };
    self.output.send(ctx, "Output", output);
  }

  fn tool_used(&mut self, tool: Tool, _ctx: &mut GateContext<'_>) {
    if tool != Tool::Screwdriver {
      return;
    }
    self.channel = radio::next_channel(self.channel);
    debug!(gate = %self.base.name(), channel = self.channel, "channel stepped");
  }
}
