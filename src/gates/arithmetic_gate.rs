//! # Arithmetic Gate
//!
//! Computes a numeric function of its inputs.
//!
//! ## Ports
//!
//! - **Input**: `"InputA"`, plus `"InputB"` for binary operations only
//! - **Output**: `"Output"` - the numeric result, clamped to the configured range
//!
//! ## Behavior
//!
//! Any required input that is empty makes the output empty. Non-numeric
//! strings compute as `0`. A divisor smaller than `1e-4` in magnitude, or any
//! NaN/infinite result, collapses to an empty output instead of reaching the
//! wire. Trigonometric inputs are degrees. The screwdriver cycles through the
//! ten operations; crossing between unary and binary arity adds or removes
//! `InputB`, and stale links through a removed port are pruned by the
//! simulator.

use crate::gate::{BaseGate, Gate, GateContext, OutputLatch, PortMap, Tool};
use crate::signal::SignalValue;
use tracing::debug;

/// Divisors below this magnitude make division collapse to an empty output.
/// The epsilon is deliberate anti-spike behavior; do not tighten it to an
/// exact zero comparison.
const DIVISOR_EPSILON: f32 = 1e-4;

/// The ten arithmetic operations, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperation {
  /// `A + B`
  Add,
  /// `A - B`
  Subtract,
  /// `A * B`
  Multiply,
  /// `A / B`, empty when `|B| < 1e-4`
  Divide,
  /// `sin(A)`, A in degrees
  Sin,
  /// `cos(A)`, A in degrees
  Cos,
  /// `sqrt(A)`, empty for negative A
  Sqrt,
  /// `|A|`
  Abs,
  /// `floor(A)`
  Floor,
  /// `ceil(A)`
  Ceil,
}

impl ArithmeticOperation {
  const ALL: [ArithmeticOperation; 10] = [
    ArithmeticOperation::Add,
    ArithmeticOperation::Subtract,
    ArithmeticOperation::Multiply,
    ArithmeticOperation::Divide,
    ArithmeticOperation::Sin,
    ArithmeticOperation::Cos,
    ArithmeticOperation::Sqrt,
    ArithmeticOperation::Abs,
    ArithmeticOperation::Floor,
    ArithmeticOperation::Ceil,
  ];

  /// Returns true for single-input operations.
  pub fn is_unary(self) -> bool {
    matches!(
      self,
      ArithmeticOperation::Sin
        | ArithmeticOperation::Cos
        | ArithmeticOperation::Sqrt
        | ArithmeticOperation::Abs
        | ArithmeticOperation::Floor
        | ArithmeticOperation::Ceil
    )
  }

  /// The next operation in the cycle, wrapping after the last.
  pub fn next(self) -> Self {
    let index = Self::ALL.iter().position(|op| *op == self).unwrap_or(0);
    Self::ALL[(index + 1) % Self::ALL.len()]
  }
}

#[derive(Debug, Clone, Copy)]
enum PortRole {
  InputA,
  InputB,
}

/// A gate that computes a numeric function of one or two inputs.
pub struct ArithmeticGate {
  base: BaseGate,
  ports: PortMap<PortRole>,
  operation: ArithmeticOperation,
  min_value: f32,
  max_value: f32,
  last_a: SignalValue,
  last_b: SignalValue,
  output: OutputLatch,
}

impl ArithmeticGate {
  /// Creates an arithmetic gate performing `Add`, with ports
  /// `InputA`/`InputB` → `Output` and the default clamp of ±999999.
  pub fn new(name: impl Into<String>) -> Self {
    let mut gate = Self {
      base: BaseGate::new(name.into(), Vec::new(), vec!["Output".to_string()]),
      ports: PortMap::new(Vec::new()),
      operation: ArithmeticOperation::Add,
      min_value: -999_999.0,
      max_value: 999_999.0,
      last_a: SignalValue::Empty,
      last_b: SignalValue::Empty,
      output: OutputLatch::new(),
    };
    gate.rebuild_ports();
    gate
  }

  /// Sets the operation, updating the port set for its arity.
  pub fn with_operation(mut self, operation: ArithmeticOperation) -> Self {
    self.operation = operation;
    self.rebuild_ports();
    self
  }

  /// Sets the output clamp range.
  pub fn with_clamp(mut self, min_value: f32, max_value: f32) -> Self {
    self.min_value = min_value;
    self.max_value = max_value;
    self
  }

  /// Returns the current operation.
  pub fn operation(&self) -> ArithmeticOperation {
    self.operation
  }

  fn rebuild_ports(&mut self) {
    let mut inputs = vec!["InputA".to_string()];
    let mut roles = vec![("InputA".to_string(), PortRole::InputA)];
    if !self.operation.is_unary() {
      inputs.push("InputB".to_string());
      roles.push(("InputB".to_string(), PortRole::InputB));
    }
    self.base.set_input_port_names(inputs);
    self.ports = PortMap::new(roles);
  }

  fn compute(&self) -> SignalValue {
    if self.last_a.is_empty() || (!self.operation.is_unary() && self.last_b.is_empty()) {
      return SignalValue::empty();
    }

    let a = self.last_a.numeric_value();
    let b = if self.operation.is_unary() {
      0.0
    } else {
      self.last_b.numeric_value()
    };

    let result = match self.operation {
      ArithmeticOperation::Add => a + b,
      ArithmeticOperation::Subtract => a - b,
      ArithmeticOperation::Multiply => a * b,
      ArithmeticOperation::Divide => {
        if b.abs() < DIVISOR_EPSILON {
          f32::NAN
        } else {
          a / b
        }
      }
      ArithmeticOperation::Sin => a.to_radians().sin(),
      ArithmeticOperation::Cos => a.to_radians().cos(),
      ArithmeticOperation::Sqrt => {
        if a >= 0.0 {
          a.sqrt()
        } else {
          f32::NAN
        }
      }
      ArithmeticOperation::Abs => a.abs(),
      ArithmeticOperation::Floor => a.floor(),
      ArithmeticOperation::Ceil => a.ceil(),
    };

    if result.is_nan() || result.is_infinite() {
      SignalValue::empty()
    } else {
      SignalValue::numeric(result.clamp(self.min_value, self.max_value))
    }
  }

  fn update_output(&mut self, ctx: &mut GateContext<'_>) {
    let output = self.compute();
    self.output.send(ctx, "Output", output);
  }
}

impl Gate for ArithmeticGate {
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
    match self.ports.role(port) {
      Some(PortRole::InputA) => self.last_a = signal,
      Some(PortRole::InputB) => self.last_b = signal,
      None => return,
    }
    self.update_output(ctx);
  }

  fn tool_used(&mut self, tool: Tool, ctx: &mut GateContext<'_>) {
    if tool != Tool::Screwdriver {
      return;
    }
    self.operation = self.operation.next();
    self.rebuild_ports();
    debug!(gate = %self.base.name(), operation = ?self.operation, "operation cycled");
    self.update_output(ctx);
  }
}
