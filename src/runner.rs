//! # Tick Runner
//!
//! Drives a [`Simulator`] from wall-clock time. The simulator itself is
//! purely logical; this adapter advances it once per interval tick so demos
//! and services can run a circuit in real time.

use crate::sim::Simulator;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Default tick period, matching the nominal frame the gates assume.
pub const DEFAULT_TICK: Duration = Duration::from_millis(17);

/// Drives a simulator at a fixed period.
pub struct TickRunner {
  period: Duration,
}

impl TickRunner {
  /// Creates a runner with the given tick period.
  pub fn new(period: Duration) -> Self {
    Self { period }
  }

  /// The configured tick period.
  pub fn period(&self) -> Duration {
    self.period
  }

  /// Advances the simulator once per period until `total` simulated time has
  /// elapsed.
  ///
  /// Each interval tick advances the logical clock by exactly one period;
  /// missed wall-clock ticks are skipped rather than bursted, so logical
  /// time never jumps.
  pub async fn run_for(&self, sim: &mut Simulator, total: Duration) {
    let mut interval = time::interval(self.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let deadline = sim.now() + total;

    debug!(period = ?self.period, ?total, "runner started");
    while sim.now() < deadline {
      interval.tick().await;
      sim.advance(self.period);
    }
    debug!(now = ?sim.now(), "runner finished");
  }
}

impl Default for TickRunner {
  fn default() -> Self {
    Self::new(DEFAULT_TICK)
  }
}
