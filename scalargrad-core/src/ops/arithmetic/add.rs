use crate::error::GradError;
use crate::node::Op;
use crate::ops::{resolve, Operand};
use crate::value::Value;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two nodes, or a node and a raw number.
///
/// Gradient rule: both operands receive the upstream gradient unchanged.
pub fn add_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, GradError> {
    let graph = a.graph();
    let b = resolve(graph, b.into(), "add")?;
    let value = a.value() + b.value();
    Ok(graph.apply(Op::Add([a.id(), b.id()]), value))
}

// --- Operator overloads ---
//
// Panic with the error of `add_op`, which only fails on operands from another graph.

impl<'g> Add for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Self::Output {
        add_op(self, rhs).unwrap_or_else(|e| panic!("Add operation failed: {}", e))
    }
}

impl<'g> Add<f64> for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: f64) -> Self::Output {
        add_op(self, rhs).unwrap_or_else(|e| panic!("Add operation failed: {}", e))
    }
}

impl<'g> Add<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Self::Output {
        add_op(rhs, self).unwrap_or_else(|e| panic!("Add operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
