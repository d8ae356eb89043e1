//! # Power Grid Feed
//!
//! The relay gates power as well as signals, and the numeric load computation
//! lives outside this crate. [`PowerGrid`] is the seam: it answers "what is
//! the current load demand on this node", or `None` when the node has no
//! power source attached. A missing reading makes the relay skip that tick's
//! load/power update; it self-heals on the next tick.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Source of load-demand readings, keyed by node name.
pub trait PowerGrid: Send + Sync {
  /// Returns the load demand (watts) on a node, or `None` when the node has
  /// no power source attached this tick.
  fn load_demand(&self, node: &str) -> Option<f32>;
}

/// A grid with no power sources; every reading is `None`.
#[derive(Debug, Default)]
pub struct NoPowerGrid;

impl PowerGrid for NoPowerGrid {
  fn load_demand(&self, _node: &str) -> Option<f32> {
    None
  }
}

/// A fixed table of demands, settable at any time. Used in tests and demos.
#[derive(Debug, Default)]
pub struct StaticPowerGrid {
  demands: Mutex<HashMap<String, f32>>,
}

impl StaticPowerGrid {
  /// Creates an empty grid.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the demand reading for a node.
  pub fn set_demand(&self, node: &str, watts: f32) {
    self
      .demands
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .insert(node.to_string(), watts);
  }

  /// Removes the demand reading for a node, simulating a missing power source.
  pub fn clear_demand(&self, node: &str) {
    self
      .demands
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .remove(node);
  }
}

impl PowerGrid for StaticPowerGrid {
  fn load_demand(&self, node: &str) -> Option<f32> {
    self
      .demands
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .get(node)
      .copied()
  }
}
