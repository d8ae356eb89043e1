//! # Simulator
//!
//! This module hosts the gates, the link map, and the shared radio medium,
//! and drives everything from a logical clock.
//!
//! ## Delivery model
//!
//! All activity is serialized. External inputs, tool uses, and clock
//! advancement each run the event loop to quiescence: every gate callback
//! collects its effects first, then the simulator routes them, so a gate is
//! never re-entered while it is handling an event. Emissions are encoded to
//! the wire payload at the source port and decoded at each sink port, one
//! decode per delivery, so a value fanned out to three sinks crosses the
//! wire three times.
//!
//! Feedback loops are safe because every gate emits through a change latch:
//! a cycle quiesces as soon as some gate's output stops changing.

use crate::error::SimError;
use crate::gate::{Effect, Gate, GateContext, Tool};
use crate::link::LinkMap;
use crate::payload::SignalPayload;
use crate::power::{NoPowerGrid, PowerGrid};
use crate::radio::RadioPacket;
use crate::signal::SignalValue;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// One pending delivery inside the event loop.
enum Event {
  /// A signal payload headed for a sink port.
  Signal {
    node: String,
    port: String,
    payload: SignalPayload,
  },
  /// A radio packet headed for one listener.
  Packet { node: String, packet: RadioPacket },
}

/// The circuit simulator: gates, links, radio, clock, and power.
pub struct Simulator {
  gates: Vec<Box<dyn Gate>>,
  index: HashMap<String, usize>,
  links: LinkMap,
  clock: Duration,
  grid: Arc<dyn PowerGrid>,
  displays: HashMap<String, String>,
}

impl Simulator {
  /// Creates an empty simulator with the clock at zero and no power source.
  pub fn new() -> Self {
    Self {
      gates: Vec::new(),
      index: HashMap::new(),
      links: LinkMap::new(),
      clock: Duration::ZERO,
      grid: Arc::new(NoPowerGrid),
      displays: HashMap::new(),
    }
  }

  /// Attaches a power source consulted for per-gate load demand.
  pub fn with_power_grid(mut self, grid: Arc<dyn PowerGrid>) -> Self {
    self.grid = grid;
    self
  }

  /// Replaces the attached power source.
  pub fn set_power_grid(&mut self, grid: Arc<dyn PowerGrid>) {
    self.grid = grid;
  }

  /// Current simulation time.
  pub fn now(&self) -> Duration {
    self.clock
  }

  /// Adds a gate under its own name, registering its ports in the link map.
  pub fn add_gate(&mut self, gate: impl Gate + 'static) -> Result<(), SimError> {
    self.add_boxed_gate(Box::new(gate))
  }

  /// Adds an already-boxed gate.
  pub fn add_boxed_gate(&mut self, gate: Box<dyn Gate>) -> Result<(), SimError> {
    let name = gate.name().to_string();
    if self.index.contains_key(&name) {
      return Err(SimError::DuplicateGate(name));
    }
    self.links.ensure_sink_ports(&name, gate.input_port_names());
    self
      .links
      .ensure_source_ports(&name, gate.output_port_names());
    debug!(gate = %name, "gate added");
    self.index.insert(name, self.gates.len());
    self.gates.push(gate);
    Ok(())
  }

  /// Connects a source port to a sink port.
  pub fn connect(
    &mut self,
    source_node: &str,
    source_port: &str,
    sink_node: &str,
    sink_port: &str,
  ) -> Result<(), SimError> {
    self
      .links
      .connect(source_node, source_port, sink_node, sink_port)?;
    Ok(())
  }

  /// Removes a link, if present.
  pub fn disconnect(
    &mut self,
    source_node: &str,
    source_port: &str,
    sink_node: &str,
    sink_port: &str,
  ) {
    self
      .links
      .disconnect(source_node, source_port, sink_node, sink_port);
  }

  /// Read-only view of the link graph.
  pub fn links(&self) -> &LinkMap {
    &self.links
  }

  /// Injects a signal into a gate's sink port, as if delivered over a link,
  /// and runs the resulting activity to quiescence.
  pub fn send(&mut self, node: &str, port: &str, value: SignalValue) -> Result<(), SimError> {
    if !self.index.contains_key(node) {
      return Err(SimError::UnknownGate(node.to_string()));
    }
    let mut queue = VecDeque::new();
    queue.push_back(Event::Signal {
      node: node.to_string(),
      port: port.to_string(),
      payload: SignalPayload::from_value(&value),
    });
    self.run_events(queue);
    Ok(())
  }

  /// Applies a tool to a gate, reconciles its port set, and runs the
  /// resulting activity to quiescence.
  pub fn use_tool(&mut self, node: &str, tool: Tool) -> Result<(), SimError> {
    let Some(&i) = self.index.get(node) else {
      return Err(SimError::UnknownGate(node.to_string()));
    };
    let mut effects = Vec::new();
    let demand = self.grid.load_demand(node);
    {
      let mut ctx = GateContext::new(self.clock, &mut effects, demand);
      self.gates[i].tool_used(tool, &mut ctx);
    }
    // Reconfiguration can add or remove ports; prune stale links before
    // routing anything the tool use emitted.
    let sinks = self.gates[i].input_port_names().to_vec();
    let sources = self.gates[i].output_port_names().to_vec();
    self.links.sync_ports(node, &sinks, &sources);

    let mut queue = VecDeque::new();
    self.route_effects(node, effects, &mut queue);
    self.run_events(queue);
    Ok(())
  }

  /// Advances the clock by `dt`, ticks every gate in insertion order, and
  /// runs all resulting activity to quiescence.
  pub fn advance(&mut self, dt: Duration) {
    self.clock += dt;
    trace!(now = ?self.clock, "tick");
    let mut queue = VecDeque::new();
    for i in 0..self.gates.len() {
      let name = self.gates[i].name().to_string();
      let demand = self.grid.load_demand(&name);
      let mut effects = Vec::new();
      {
        let mut ctx = GateContext::new(self.clock, &mut effects, demand);
        self.gates[i].tick(&mut ctx);
      }
      self.route_effects(&name, effects, &mut queue);
    }
    self.run_events(queue);
  }

  /// The display surface text of a screen gate, if it has shown anything.
  pub fn display_text(&self, node: &str) -> Option<&str> {
    self.displays.get(node).map(String::as_str)
  }

  /// Drains the event queue, routing each callback's effects back into it.
  fn run_events(&mut self, mut queue: VecDeque<Event>) {
    while let Some(event) = queue.pop_front() {
      match event {
        Event::Signal {
          node,
          port,
          payload,
        } => {
          let Some(&i) = self.index.get(&node) else {
            continue;
          };
          let value = payload.to_value();
          trace!(gate = %node, port = %port, ?value, "signal delivered");
          let demand = self.grid.load_demand(&node);
          let mut effects = Vec::new();
          {
            let mut ctx = GateContext::new(self.clock, &mut effects, demand);
            self.gates[i].signal_received(&port, value, &mut ctx);
          }
          self.route_effects(&node, effects, &mut queue);
        }
        Event::Packet { node, packet } => {
          let Some(&i) = self.index.get(&node) else {
            continue;
          };
          let demand = self.grid.load_demand(&node);
          let mut effects = Vec::new();
          {
            let mut ctx = GateContext::new(self.clock, &mut effects, demand);
            self.gates[i].packet_received(&packet, &mut ctx);
          }
          self.route_effects(&node, effects, &mut queue);
        }
      }
    }
  }

  /// Turns one gate's effects into queued deliveries and display updates.
  fn route_effects(&mut self, node: &str, effects: Vec<Effect>, queue: &mut VecDeque<Event>) {
    for effect in effects {
      match effect {
        Effect::Signal { port, value } => {
          let payload = SignalPayload::from_value(&value);
          for (sink_node, sink_port) in self.links.sinks_of(node, &port) {
            queue.push_back(Event::Signal {
              node: sink_node,
              port: sink_port,
              payload: payload.clone(),
            });
          }
        }
        Effect::Broadcast(packet) => {
          trace!(gate = %node, channel = packet.channel, "broadcast");
          // Every gate except the sender hears the packet; channel
          // filtering is the listener's business.
          for gate in &self.gates {
            if gate.name() != node {
              queue.push_back(Event::Packet {
                node: gate.name().to_string(),
                packet: packet.clone(),
              });
            }
          }
        }
        Effect::Display(text) => {
          self.displays.insert(node.to_string(), text);
        }
      }
    }
  }
}

impl Default for Simulator {
  fn default() -> Self {
    Self::new()
  }
}
