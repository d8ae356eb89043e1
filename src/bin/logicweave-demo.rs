//! Demo circuit: a counter-ish loop of gates driving a text screen, run in
//! real time for a couple of seconds.

use logicweave::error::SimError;
use logicweave::gates::{ArithmeticGate, ArithmeticOperation, DelayGate, NotGate, TextScreen};
use logicweave::runner::TickRunner;
use logicweave::signal::SignalValue;
use logicweave::sim::Simulator;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), SimError> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,logicweave=debug".into()),
    )
    .init();

  let mut sim = Simulator::new();

  sim.add_gate(NotGate::new("inverter"))?;
  sim.add_gate(
    ArithmeticGate::new("adder").with_operation(ArithmeticOperation::Add),
  )?;
  sim.add_gate(DelayGate::new("delay").with_delay(Duration::from_millis(500)))?;
  sim.add_gate(TextScreen::new("screen"))?;

  // inverter -> adder (both inputs) -> delay -> screen
  sim.connect("inverter", "Output", "adder", "InputA")?;
  sim.connect("inverter", "Output", "adder", "InputB")?;
  sim.connect("adder", "Output", "delay", "Input")?;
  sim.connect("delay", "Output", "screen", "Input")?;

  sim.send("inverter", "Input", SignalValue::string("0"))?;

  let runner = TickRunner::default();
  runner.run_for(&mut sim, Duration::from_secs(2)).await;

  println!(
    "screen shows: {}",
    sim.display_text("screen").unwrap_or("<blank>")
  );
  Ok(())
}
