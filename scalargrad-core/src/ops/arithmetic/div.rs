use crate::error::GradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_scalar;
use crate::ops::{ensure_same_graph, Operand};
use crate::value::Value;
use std::ops::Div;

/// Divides `a` by `b`, defined as `a * b^-1`.
///
/// Division by a node holding 0 is not an error: the result is infinite or NaN.
/// A raw divisor is inverted before it is wrapped, so `a / 4.0` is `a * 0.25`.
pub fn div_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, GradError> {
    match b.into() {
        Operand::Node(b) => {
            let b = ensure_same_graph(a.graph(), b, "div")?;
            mul_op(a, pow_scalar(b, -1.0))
        }
        Operand::Scalar(b) => mul_op(a, b.powi(-1)),
    }
}

impl<'g> Div for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Self::Output {
        div_op(self, rhs).unwrap_or_else(|e| panic!("Div operation failed: {}", e))
    }
}

impl<'g> Div<f64> for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: f64) -> Self::Output {
        div_op(self, rhs).unwrap_or_else(|e| panic!("Div operation failed: {}", e))
    }
}

/// `c / v` is `v^-1 * c`.
impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Self::Output {
        mul_op(pow_scalar(rhs, -1.0), self)
            .unwrap_or_else(|e| panic!("Div operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
