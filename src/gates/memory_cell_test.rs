//! Tests for MemoryCell

use crate::gate::Gate;
use crate::gates::MemoryCell;
use crate::gates::testing::{deliver, signal_on, tick};
use crate::signal::SignalValue;
use std::time::Duration;

#[test]
fn test_memory_cell_creation() {
  let cell = MemoryCell::new("mem");
  assert_eq!(cell.name(), "mem");
  assert!(cell.has_input_port("MemoryInput"));
  assert!(cell.has_input_port("LockState"));
  assert!(cell.has_output_port("Output"));
  assert!(cell.accepting());
  assert_eq!(cell.stored(), "");
}

#[test]
fn test_memory_cell_silent_until_written() {
  let mut cell = MemoryCell::new("mem");

  // The latch is seeded with the initial empty string, so an untouched cell
  // does not announce itself on the first tick.
  let effects = tick(&mut cell, Duration::ZERO);
  assert!(effects.is_empty());
}

#[test]
fn test_memory_cell_stores_and_publishes() {
  let mut cell = MemoryCell::new("mem");

  let effects = deliver(
    &mut cell,
    "MemoryInput",
    SignalValue::string("42"),
    Duration::ZERO,
  );
  // Storage is quiet; the value goes out on the next tick.
  assert!(effects.is_empty());
  assert_eq!(cell.stored(), "42");

  let effects = tick(&mut cell, Duration::ZERO);
  assert_eq!(
    signal_on(&effects, "Output"),
    Some(SignalValue::string("42"))
  );

  // Repeated ticks with unchanged contents stay quiet.
  let effects = tick(&mut cell, Duration::ZERO);
  assert!(effects.is_empty());
}

#[test]
fn test_memory_cell_empty_input_keeps_value() {
  let mut cell = MemoryCell::new("mem").with_stored("keep");

  deliver(&mut cell, "MemoryInput", SignalValue::empty(), Duration::ZERO);
  assert_eq!(cell.stored(), "keep");
}

#[test]
fn test_memory_cell_lock_blocks_writes() {
  let mut cell = MemoryCell::new("mem");

  deliver(&mut cell, "LockState", SignalValue::string("0"), Duration::ZERO);
  assert!(!cell.accepting());

  deliver(
    &mut cell,
    "MemoryInput",
    SignalValue::string("blocked"),
    Duration::ZERO,
  );
  assert_eq!(cell.stored(), "");

  // Only "1" unlocks.
  deliver(&mut cell, "LockState", SignalValue::string("unlock"), Duration::ZERO);
  assert!(!cell.accepting());
  deliver(&mut cell, "LockState", SignalValue::string("1"), Duration::ZERO);
  assert!(cell.accepting());

  deliver(
    &mut cell,
    "MemoryInput",
    SignalValue::string("written"),
    Duration::ZERO,
  );
  assert_eq!(cell.stored(), "written");
}

#[test]
fn test_memory_cell_empty_lock_signal_is_noop() {
  let mut cell = MemoryCell::new("mem");

  deliver(&mut cell, "LockState", SignalValue::string("0"), Duration::ZERO);
  assert!(!cell.accepting());

  deliver(&mut cell, "LockState", SignalValue::empty(), Duration::ZERO);
  assert!(!cell.accepting());
}
