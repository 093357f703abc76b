use crate::error::GradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;
use std::ops::Neg;

/// Negates a node, defined as `a * -1`.
pub fn neg_op(a: Value<'_>) -> Result<Value<'_>, GradError> {
    mul_op(a, -1.0)
}

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Self::Output {
        neg_op(self).unwrap_or_else(|e| panic!("Neg operation failed: {}", e))
    }
}
