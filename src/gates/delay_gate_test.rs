//! Tests for DelayGate

use crate::gate::{Gate, Tool};
use crate::gates::DelayGate;
use crate::gates::testing::{deliver, signal_on, tick, use_tool};
use crate::signal::SignalValue;
use std::time::Duration;

fn at(secs: u64) -> Duration {
  Duration::from_secs(secs)
}

#[test]
fn test_delay_gate_creation() {
  let gate = DelayGate::new("delay");
  assert_eq!(gate.name(), "delay");
  assert!(gate.has_input_port("Input"));
  assert!(gate.has_output_port("Output"));
  assert_eq!(gate.reset_flags(), (false, false));
  assert_eq!(gate.pending(), 0);
}

#[test]
fn test_delay_gate_plain_fifo() {
  let mut gate = DelayGate::new("delay");

  deliver(&mut gate, "Input", SignalValue::string("X"), at(0));
  deliver(&mut gate, "Input", SignalValue::string("Y"), at(1));
  assert_eq!(gate.pending(), 2);

  let effects = tick(&mut gate, at(4));
  assert!(effects.is_empty());

  let effects = tick(&mut gate, at(5));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("X")));
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(6));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("Y")));
  assert_eq!(gate.pending(), 0);
}

#[test]
fn test_delay_gate_plain_queues_repeats() {
  let mut gate = DelayGate::new("delay");

  deliver(&mut gate, "Input", SignalValue::string("X"), at(0));
  deliver(&mut gate, "Input", SignalValue::string("X"), at(1));
  assert_eq!(gate.pending(), 2);

  let effects = tick(&mut gate, at(5));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("X")));

  // The second entry drains but the latch suppresses the identical value.
  let effects = tick(&mut gate, at(6));
  assert!(effects.is_empty());
  assert_eq!(gate.pending(), 0);
}

#[test]
fn test_delay_gate_custom_delay() {
  let mut gate = DelayGate::new("delay").with_delay(Duration::from_millis(100));

  deliver(&mut gate, "Input", SignalValue::string("X"), Duration::ZERO);
  let effects = tick(&mut gate, Duration::from_millis(99));
  assert!(effects.is_empty());
  let effects = tick(&mut gate, Duration::from_millis(100));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("X")));
}

#[test]
fn test_delay_gate_impulse_pulses() {
  let mut gate = DelayGate::new("delay").with_reset_on_signal(true);

  deliver(&mut gate, "Input", SignalValue::string("GO"), at(0));
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(5));
  assert_eq!(
    signal_on(&effects, "Output"),
    Some(SignalValue::string("GO"))
  );
  // The pulse is ended by a queued empty one nominal tick later.
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(6));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::empty()));
  assert_eq!(gate.pending(), 0);
}

#[test]
fn test_delay_gate_impulse_retrigger_clears_queue() {
  let mut gate = DelayGate::new("delay").with_reset_on_signal(true);

  deliver(&mut gate, "Input", SignalValue::string("A"), at(0));
  deliver(&mut gate, "Input", SignalValue::string("B"), at(1));
  // The retrigger dropped A; only B remains, due at t=6.
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(5));
  assert!(effects.is_empty());

  let effects = tick(&mut gate, at(6));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("B")));
}

#[test]
fn test_delay_gate_impulse_ignores_empty_input() {
  let mut gate = DelayGate::new("delay").with_reset_on_signal(true);

  // Empty input does not trigger and is not queued.
  deliver(&mut gate, "Input", SignalValue::empty(), at(0));
  assert_eq!(gate.pending(), 0);
}

#[test]
fn test_delay_gate_smoothing_drops_repeats() {
  let mut gate = DelayGate::new("delay").with_reset_on_change(true);

  deliver(&mut gate, "Input", SignalValue::string("A"), at(0));
  assert_eq!(gate.pending(), 1);

  // Same value again: no change, dropped; the first entry keeps its due time.
  deliver(&mut gate, "Input", SignalValue::string("A"), at(1));
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(5));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("A")));
}

#[test]
fn test_delay_gate_smoothing_restarts_on_change() {
  let mut gate = DelayGate::new("delay").with_reset_on_change(true);

  deliver(&mut gate, "Input", SignalValue::string("A"), at(0));
  deliver(&mut gate, "Input", SignalValue::string("B"), at(2));
  assert_eq!(gate.pending(), 1);

  let effects = tick(&mut gate, at(5));
  assert!(effects.is_empty());

  let effects = tick(&mut gate, at(7));
  assert_eq!(signal_on(&effects, "Output"), Some(SignalValue::string("B")));
}

#[test]
fn test_delay_gate_first_input_counts_as_change() {
  let mut gate = DelayGate::new("delay").with_reset_on_change(true);

  // No previous input: even an empty signal is a change and gets queued.
  deliver(&mut gate, "Input", SignalValue::empty(), at(0));
  assert_eq!(gate.pending(), 1);
}

#[test]
fn test_delay_gate_screwdriver_cycles_modes() {
  let mut gate = DelayGate::new("delay");

  use_tool(&mut gate, Tool::Screwdriver, at(0));
  assert_eq!(gate.reset_flags(), (true, false));
  use_tool(&mut gate, Tool::Screwdriver, at(0));
  assert_eq!(gate.reset_flags(), (true, true));
  use_tool(&mut gate, Tool::Screwdriver, at(0));
  assert_eq!(gate.reset_flags(), (false, true));
  use_tool(&mut gate, Tool::Screwdriver, at(0));
  assert_eq!(gate.reset_flags(), (false, false));
}
