//! # Logicweave
//!
//! An event-driven logic-circuit simulation. Gates exchange typed signals
//! over named ports: combinational gates (NOT, EQUALS, arithmetic), a timed
//! FIFO delay buffer, a lockable memory cell, a power relay, a text screen,
//! and a wifi transceiver over a shared radio medium.
//!
//! ## Architecture
//!
//! - [`signal`] defines the in-memory signal value and its equality,
//!   truthiness, and numeric rendering rules.
//! - [`payload`] is the serializable wire form; every hop across a link or
//!   the radio goes through an encode/decode pair.
//! - [`gate`] is the contract gates implement, plus the shared building
//!   blocks (base identity, port-role lookup, output change latch).
//! - [`gates`] is the built-in gate library.
//! - [`link`] owns the many-to-many port link graph.
//! - [`sim`] hosts everything and serializes all activity behind a logical
//!   clock.
//! - [`runner`] adapts the logical clock to wall time with tokio.
//! - [`power`] and [`radio`] are the power source seam and the broadcast
//!   packet format.
//!
//! ## Example
//!
//! ```no_run
//! use logicweave::gates::{NotGate, TextScreen};
//! use logicweave::sim::Simulator;
//! use logicweave::signal::SignalValue;
//!
//! # fn main() -> Result<(), logicweave::error::SimError> {
//! let mut sim = Simulator::new();
//! sim.add_gate(NotGate::new("inverter"))?;
//! sim.add_gate(TextScreen::new("screen"))?;
//! sim.connect("inverter", "Output", "screen", "Input")?;
//! sim.send("inverter", "Input", SignalValue::string("0"))?;
//! assert_eq!(sim.display_text("screen"), Some("1"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod gate;
pub mod gates;
pub mod link;
pub mod payload;
pub mod power;
pub mod radio;
pub mod runner;
pub mod signal;
pub mod sim;


pub use error::{LinkError, SimError};
pub use gate::{Effect, Gate, GateContext, Tool};
pub use link::{Link, LinkMap};
pub use payload::{SignalPayload, SignalState};
pub use power::{NoPowerGrid, PowerGrid, StaticPowerGrid};
pub use radio::RadioPacket;
pub use runner::TickRunner;
pub use signal::SignalValue;
pub use sim::Simulator;
