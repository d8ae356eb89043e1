//! # Delay Gate
//!
//! A timed FIFO signal buffer with three operating modes.
//!
//! ## Ports
//!
//! - **Input**: `"Input"` - signals to buffer
//! - **Output**: `"Output"` - the buffered signals, after the delay
//!
//! ## Behavior
//!
//! - **Plain mode** (no reset flags): every received value, repeats included,
//!   is queued with its own due time of now + delay. The queue drains
//!   strictly in arrival order, so several entries can be in flight at once.
//! - **Impulse mode** (`reset_on_signal`): a non-empty input immediately
//!   emits empty, clears the queue, and queues the value; when that value
//!   fires, a synthetic empty entry follows one pulse later, producing an
//!   edge-triggered blip instead of a sustained level.
//! - **Smoothing mode** (`reset_on_change`): any value change immediately
//!   emits empty, clears the queue, and queues the new value.
//!
//! The screwdriver cycles none → impulse → both → smoothing → none. In a
//! reset mode, an input that does not trigger the reset condition is dropped
//! rather than queued. Queued entries are not persisted; dropping the gate
//! drops them.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap, Tool};
use crate::signal::SignalValue;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

/// Nominal tick length, used as the pulse duration for impulse-mode blips.
const PULSE_DURATION: Duration = Duration::from_millis(17);

/// One queued signal waiting out its delay.
#[derive(Debug, Clone)]
struct DelayedEntry {
  value: SignalValue,
  due: Duration,
  pulse: Duration,
}

/// A gate that emits received signals after a configurable delay.
pub struct DelayGate {
  base: BaseGate,
  ports: PortMap<()>,
  delay: Duration,
  reset_on_signal: bool,
  reset_on_change: bool,
  queue: VecDeque<DelayedEntry>,
  last_input: Option<SignalValue>,
  output: OutputLatch,
}

impl DelayGate {
  /// Creates a delay gate with ports `Input` → `Output`, a five-second delay,
  /// and both reset flags off (plain mode).
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      base: BaseGate::new(
        name.into(),
        vec!["Input".to_string()],
        vec!["Output".to_string()],
      ),
      ports: PortMap::new(vec![("Input".to_string(), ())]),
      delay: Duration::from_secs(5),
      reset_on_signal: false,
      reset_on_change: false,
      queue: VecDeque::new(),
      last_input: None,
      output: OutputLatch::new(),
    }
  }

  /// Sets the delay between receiving a signal and emitting it.
  pub fn with_delay(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }

  /// Enables impulse mode.
  pub fn with_reset_on_signal(mut self, value: bool) -> Self {
    self.reset_on_signal = value;
    self
  }

  /// Enables smoothing mode.
  pub fn with_reset_on_change(mut self, value: bool) -> Self {
    self.reset_on_change = value;
    self
  }

  /// Returns the reset flags as `(reset_on_signal, reset_on_change)`.
  pub fn reset_flags(&self) -> (bool, bool) {
    (self.reset_on_signal, self.reset_on_change)
  }

  /// Number of entries currently waiting out their delay.
  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  fn cycle_mode(&mut self) {
    // none -> reset_on_signal -> both -> reset_on_change -> none
    match (self.reset_on_signal, self.reset_on_change) {
      (false, false) => self.reset_on_signal = true,
      (true, false) => self.reset_on_change = true,
      (true, true) => self.reset_on_signal = false,
      (false, true) => self.reset_on_change = false,
    }
  }
}

impl Gate for DelayGate {
  fn name(&self) -> &str {
    self.base.name()
  }

  fn set_name(&mut self, name: &str) {
    self.base.set_name(name);
  }

  fn input_port_names(&self) -> &[String] {
    self.base.input_port_names()
  }

  fn output_port_names(&self) -> &[String] {
    self.base.output_port_names()
  }

  fn signal_received(&mut self, port: &str, signal: SignalValue, ctx: &mut GateContext<'_>) {
    if self.ports.role(port).is_none() {
      return;
    }
    let due = ctx.now() + self.delay;

    if self.reset_on_signal || self.reset_on_change {
      let changed = self
        .last_input
        .as_ref()
        .is_none_or(|last| *last != signal);

      if (self.reset_on_signal && !signal.is_empty()) || (self.reset_on_change && changed) {
        self.queue.clear();
        self.output.send(ctx, "Output", SignalValue::empty());

        if self.reset_on_signal {
          // Impulse: queue only real values; the pulse is ended by a
          // synthetic empty entry when the value fires.
          if !signal.is_empty() {
            self.queue.push_back(DelayedEntry {
              value: signal.clone(),
              due,
              pulse: PULSE_DURATION,
            });
          }
        } else {
          self.queue.push_back(DelayedEntry {
            value: signal.clone(),
            due,
            pulse: PULSE_DURATION,
          });
        }
      }
    } else {
      self.queue.push_back(DelayedEntry {
        value: signal.clone(),
        due,
        pulse: PULSE_DURATION,
      });
    }

    self.last_input = Some(signal);
  }

  fn tick(&mut self, ctx: &mut GateContext<'_>) {
    // Strict FIFO: the front entry blocks the queue until its due time,
    // preserving arrival order even if due times are out of order.
    while self.queue.front().is_some_and(|front| front.due <= ctx.now()) {
      let Some(entry) = self.queue.pop_front() else {
        break;
      };
      let fire_empty_at = entry.due + entry.pulse;
      let is_value = !entry.value.is_empty();
      self.output.send(ctx, "Output", entry.value);

      if self.reset_on_signal && is_value {
        self.queue.push_back(DelayedEntry {
          value: SignalValue::empty(),
          due: fire_empty_at,
          pulse: Duration::ZERO,
        });
      }
    }
  }

  fn tool_used(&mut self, tool: Tool, _ctx: &mut GateContext<'_>) {
    if tool != Tool::Screwdriver {
      return;
    }
    self.cycle_mode();
    debug!(
      gate = %self.base.name(),
      reset_on_signal = self.reset_on_signal,
      reset_on_change = self.reset_on_change,
      "delay mode cycled"
    );
  }
}
