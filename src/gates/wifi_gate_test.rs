//! Tests for WifiGate

use crate::gate::{Effect, Gate, Tool};
use crate::gates::WifiGate;
use crate::gates::testing::{deliver, receive_packet, signal_on, use_tool};
use crate::radio::RadioPacket;
use crate::signal::SignalValue;
use std::time::Duration;

#[test]
fn test_wifi_gate_creation() {
  let gate = WifiGate::new("wifi");
  assert_eq!(gate.name(), "wifi");
  assert!(gate.has_input_port("Input"));
  assert!(gate.has_input_port("SetTarget"));
  assert!(gate.has_output_port("Output"));
  assert_eq!(gate.channel(), 1);
  assert!(gate.receiving());
}

#[test]
fn test_wifi_gate_transmits_input() {
  let mut gate = WifiGate::new("wifi");

  let effects = deliver(
    &mut gate,
    "Input",
    SignalValue::string("hello"),
    Duration::ZERO,
  );
  assert!(effects.contains(&Effect::Broadcast(RadioPacket::new(1, "hello"))));
  assert!(!gate.receiving());
}

#[test]
fn test_wifi_gate_transmit_freezes_reception() {
  let mut gate = WifiGate::new("wifi");
  deliver(&mut gate, "Input", SignalValue::string("tx"), Duration::ZERO);

  // Frozen: a matching packet produces nothing.
  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "1"), Duration::ZERO);
  assert!(effects.is_empty());

  // An empty input resumes reception.
  deliver(&mut gate, "Input", SignalValue::empty(), Duration::ZERO);
  assert!(gate.receiving());
  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "1"), Duration::ZERO);
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("1")));
}

#[test]
fn test_wifi_gate_matches_target() {
  let mut gate = WifiGate::new("wifi").with_target("open");

  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "open"), Duration::ZERO);
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("1")));

  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "close"), Duration::ZERO);
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("0")));
}

#[test]
fn test_wifi_gate_filters_channel() {
  let mut gate = WifiGate::new("wifi");

  let effects = receive_packet(&mut gate, &RadioPacket::new(2, "1"), Duration::ZERO);
  assert!(effects.is_empty());
}

#[test]
fn test_wifi_gate_set_target_port() {
  let mut gate = WifiGate::new("wifi");

  deliver(
    &mut gate,
    "SetTarget",
    SignalValue::string("sesame"),
    Duration::ZERO,
  );
  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "sesame"), Duration::ZERO);
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("1")));

  // Empty target updates are ignored.
  deliver(&mut gate, "SetTarget", SignalValue::empty(), Duration::ZERO);
  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "sesame"), Duration::ZERO);
  // Still matching; the latch suppresses the repeat "1".
  assert!(effects.is_empty());
}

#[test]
fn test_wifi_gate_transmit_clears_output() {
  let mut gate = WifiGate::new("wifi");

  receive_packet(&mut gate, &RadioPacket::new(1, "1"), Duration::ZERO);

  let effects = deliver(&mut gate, "Input", SignalValue::string("tx"), Duration::ZERO);
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::empty()));
}

#[test]
fn test_wifi_gate_blank_outputs_map_to_empty() {
  let mut gate = WifiGate::new("wifi").with_failure_output("");

  deliver(&mut gate, "SetTarget", SignalValue::string("x"), Duration::ZERO);
  let effects = receive_packet(&mut gate, &RadioPacket::new(1, "nope"), Duration::ZERO);
  // Failure is blank, decoded as empty; the latch starts empty so nothing
  // goes out.
  assert!(effects.is_empty());
}

#[test]
fn test_wifi_gate_screwdriver_steps_channel() {
  let mut gate = WifiGate::new("wifi");

  use_tool(&mut gate, Tool::Screwdriver, Duration::ZERO);
  assert_eq!(gate.channel(), 2);

  let mut gate = WifiGate::new("wifi").with_channel(10);
  use_tool(&mut gate, Tool::Screwdriver, Duration::ZERO);
  assert_eq!(gate.channel(), 1);
}
