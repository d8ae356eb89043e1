//! # Gate Library
//!
//! The built-in gates. Each gate lives in its own module and implements the
//! [`Gate`](crate::gate::Gate) trait; its module doc lists the port set and
//! behavior.
//!
//! ## Available Gates
//!
//! - **NotGate**: truthiness inverter (`Input` → `Output`)
//! - **EqualsGate**: two-input comparator (`InputA`, `InputB` → `Output`)
//! - **ArithmeticGate**: numeric function (`InputA`[, `InputB`] → `Output`)
//! - **DelayGate**: timed FIFO buffer (`Input` → `Output`)
//! - **MemoryCell**: lockable register (`MemoryInput`, `LockState` → `Output`)
//! - **PowerRelay**: switchable signal/power gate (`Toggle`, `SetState`,
//!   `SignalInputA`, `SignalInputB` → five outputs)
//! - **TextScreen**: display surface (`Input` → none)
//! - **WifiGate**: radio transceiver (`Input`, `SetTarget` → `Output`)

pub mod arithmetic_gate;
pub mod delay_gate;
#[cfg(test)]
pub mod delay_gate_test;
pub mod equals_gate;
pub mod memory_cell;
#[cfg(test)]
pub mod memory_cell_test;
pub mod not_gate;
pub mod power_relay;
pub mod text_screen;
pub mod wifi_gate;
#[cfg(test)]
pub mod wifi_gate_test;

#[cfg(test)]
pub mod testing;

pub use arithmetic_gate::{ArithmeticGate, ArithmeticOperation};
pub use delay_gate::DelayGate;
pub use equals_gate::EqualsGate;
pub use memory_cell::MemoryCell;
pub use not_gate::NotGate;
pub use power_relay::PowerRelay;
pub use text_screen::TextScreen;
pub use wifi_gate::WifiGate;
