//! # Link Map
//!
//! This module owns the many-to-many link graph between source ports and
//! sink ports across nodes. Gates never touch it directly: they declare
//! their ports once at registration, and the simulator resolves each
//! emission into deliveries through the map.
//!
//! Port registration is idempotent (`ensure_sink_ports` / `ensure_source_ports`
//! can be called repeatedly), and `sync_ports` reconciles a node's port set
//! after reconfiguration: links whose port disappeared are pruned, matching
//! the arithmetic gate's unary/binary port change.

use crate::error::LinkError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One directed link from a source port to a sink port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
  /// Node owning the source port.
  pub source_node: String,
  /// Source (output) port name.
  pub source_port: String,
  /// Node owning the sink port.
  pub sink_node: String,
  /// Sink (input) port name.
  pub sink_port: String,
}

/// Per-node registered ports.
#[derive(Debug, Default)]
struct NodePorts {
  sinks: HashSet<String>,
  sources: HashSet<String>,
}

/// The link graph: registered ports per node plus the links between them.
#[derive(Debug, Default)]
pub struct LinkMap {
  ports: HashMap<String, NodePorts>,
  links: Vec<Link>,
}

impl LinkMap {
  /// Creates an empty link map.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers sink (input) ports on a node. Idempotent.
  pub fn ensure_sink_ports(&mut self, node: &str, names: &[String]) {
    let entry = self.ports.entry(node.to_string()).or_default();
    for name in names {
      entry.sinks.insert(name.clone());
    }
  }

  /// Registers source (output) ports on a node. Idempotent.
  pub fn ensure_source_ports(&mut self, node: &str, names: &[String]) {
    let entry = self.ports.entry(node.to_string()).or_default();
    for name in names {
      entry.sources.insert(name.clone());
    }
  }

  /// Returns true when the node has registered at least one port.
  pub fn has_node(&self, node: &str) -> bool {
    self.ports.contains_key(node)
  }

  /// Returns true when the node has a sink port with this name.
  pub fn has_sink_port(&self, node: &str, port: &str) -> bool {
    self
      .ports
      .get(node)
      .is_some_and(|p| p.sinks.contains(port))
  }

  /// Returns true when the node has a source port with this name.
  pub fn has_source_port(&self, node: &str, port: &str) -> bool {
    self
      .ports
      .get(node)
      .is_some_and(|p| p.sources.contains(port))
  }

  /// Connects a source port to a sink port.
  ///
  /// Validates that both ports exist. Connecting an already-linked pair is a
  /// no-op, so wiring is idempotent like port registration.
  pub fn connect(
    &mut self,
    source_node: &str,
    source_port: &str,
    sink_node: &str,
    sink_port: &str,
  ) -> Result<(), LinkError> {
    if !self.has_node(source_node) {
      return Err(LinkError::UnknownNode(source_node.to_string()));
    }
    if !self.has_node(sink_node) {
      return Err(LinkError::UnknownNode(sink_node.to_string()));
    }
    if !self.has_source_port(source_node, source_port) {
      return Err(LinkError::UnknownSourcePort {
        node: source_node.to_string(),
        port: source_port.to_string(),
      });
    }
    if !self.has_sink_port(sink_node, sink_port) {
      return Err(LinkError::UnknownSinkPort {
        node: sink_node.to_string(),
        port: sink_port.to_string(),
      });
    }

    let link = Link {
      source_node: source_node.to_string(),
      source_port: source_port.to_string(),
      sink_node: sink_node.to_string(),
      sink_port: sink_port.to_string(),
    };
    if !self.links.contains(&link) {
      debug!(
        source = %source_node, source_port = %source_port,
        sink = %sink_node, sink_port = %sink_port,
        "link connected"
      );
      self.links.push(link);
    }
    Ok(())
  }

  /// Removes the link between a source port and a sink port, if present.
  pub fn disconnect(
    &mut self,
    source_node: &str,
    source_port: &str,
    sink_node: &str,
    sink_port: &str,
  ) {
    self.links.retain(|l| {
      !(l.source_node == source_node
        && l.source_port == source_port
        && l.sink_node == sink_node
        && l.sink_port == sink_port)
    });
  }

  /// Returns the sink endpoints linked to a source port, in wiring order.
  pub fn sinks_of(&self, source_node: &str, source_port: &str) -> Vec<(String, String)> {
    self
      .links
      .iter()
      .filter(|l| l.source_node == source_node && l.source_port == source_port)
      .map(|l| (l.sink_node.clone(), l.sink_port.clone()))
      .collect()
  }

  /// Reconciles a node's registered ports with its current configuration.
  ///
  /// Ports not present in `sink_names` / `source_names` are dropped, along
  /// with any links through them. New names are registered.
  pub fn sync_ports(&mut self, node: &str, sink_names: &[String], source_names: &[String]) {
    let entry = self.ports.entry(node.to_string()).or_default();
    entry.sinks = sink_names.iter().cloned().collect();
    entry.sources = source_names.iter().cloned().collect();

    let sinks = &entry.sinks;
    let sources = &entry.sources;
    let before = self.links.len();
    self.links.retain(|l| {
      let stale_sink = l.sink_node == node && !sinks.contains(&l.sink_port);
      let stale_source = l.source_node == node && !sources.contains(&l.source_port);
      !(stale_sink || stale_source)
    });
    if self.links.len() != before {
      debug!(node = %node, pruned = before - self.links.len(), "stale links pruned");
    }
  }

  /// Returns all links, in wiring order.
  pub fn links(&self) -> &[Link] {
    &self.links
  }
}
