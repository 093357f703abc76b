use crate::error::GradError;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::{ensure_same_graph, Operand};
use crate::value::Value;
use std::ops::Sub;

/// Subtracts `b` from `a`, defined as `a + (-b)`.
///
/// A raw number is negated before it is wrapped, so `a - 2.0` is `a + (-2.0)`.
pub fn sub_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, GradError> {
    match b.into() {
        Operand::Node(b) => {
            let b = ensure_same_graph(a.graph(), b, "sub")?;
            add_op(a, neg_op(b)?)
        }
        Operand::Scalar(b) => add_op(a, -b),
    }
}

impl<'g> Sub for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Self::Output {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Sub operation failed: {}", e))
    }
}

impl<'g> Sub<f64> for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: f64) -> Self::Output {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Sub operation failed: {}", e))
    }
}

/// `c - v` is `(-v) + c`.
impl<'g> Sub<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Self::Output {
        neg_op(rhs)
            .and_then(|neg| add_op(neg, self))
            .unwrap_or_else(|e| panic!("Sub operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
