//! # Error Types
//!
//! Errors for the structural API: registering gates, declaring ports, and
//! wiring links. Steady-state gate logic never errors: invalid inputs
//! degrade to signal values (empty output, silent no-op), so these types
//! only surface while a circuit is being assembled or reconfigured.

use thiserror::Error;

/// Error type for port registration and link wiring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
  /// The named node has never registered any ports.
  #[error("unknown node: {0}")]
  UnknownNode(String),
  /// The source node exists but has no source port with this name.
  #[error("node '{node}' has no source port '{port}'")]
  UnknownSourcePort {
    /// Node owning the missing port.
    node: String,
    /// The port name that failed to resolve.
    port: String,
  },
  /// The sink node exists but has no sink port with this name.
  #[error("node '{node}' has no sink port '{port}'")]
  UnknownSinkPort {
    /// Node owning the missing port.
    node: String,
    /// The port name that failed to resolve.
    port: String,
  },
}

/// Error type for simulator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
  /// A gate with this name is already registered.
  #[error("duplicate gate name: {0}")]
  DuplicateGate(String),
  /// No gate with this name is registered.
  #[error("unknown gate: {0}")]
  UnknownGate(String),
  /// Port registration or link wiring failed.
  #[error(transparent)]
  Link(#[from] LinkError),
}
