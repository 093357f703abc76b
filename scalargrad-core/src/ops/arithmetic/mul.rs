use crate::error::GradError;
use crate::node::Op;
use crate::ops::{resolve, Operand};
use crate::value::Value;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two nodes, or a node and a raw number.
///
/// Gradient rule: each operand receives the upstream gradient times the value of the
/// other operand.
pub fn mul_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, GradError> {
    let graph = a.graph();
    let b = resolve(graph, b.into(), "mul")?;
    let value = a.value() * b.value();
    Ok(graph.apply(Op::Mul([a.id(), b.id()]), value))
}

// --- Operator overloads ---

impl<'g> Mul for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Self::Output {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Mul operation failed: {}", e))
    }
}

impl<'g> Mul<f64> for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: f64) -> Self::Output {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Mul operation failed: {}", e))
    }
}

impl<'g> Mul<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Self::Output {
        mul_op(rhs, self).unwrap_or_else(|e| panic!("Mul operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
