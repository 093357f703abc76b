use crate::error::GradError;
use crate::node::Op;
use crate::ops::Operand;
use crate::value::Value;

// --- Forward Operation ---

/// Raises a node to a real-number power.
///
/// Gradient rule: `base.grad += exponent * base^(exponent - 1) * upstream`.
///
/// # Errors
/// `InvalidOperand` if the exponent is a node (node-valued exponents are not
/// differentiable here) or is NaN / infinite.
pub fn pow_op<'g>(
    base: Value<'g>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Value<'g>, GradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(p) if p.is_finite() => p,
        Operand::Scalar(p) => {
            return Err(GradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: format!("exponent {} is not a real number", p),
            })
        }
        Operand::Node(_) => {
            return Err(GradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: "only real-number exponents are supported, got a node".to_string(),
            })
        }
    };
    Ok(pow_scalar(base, exponent))
}

/// `pow_op` for an exponent already known to be finite.
pub(crate) fn pow_scalar(base: Value<'_>, exponent: f64) -> Value<'_> {
    let value = base.value().powf(exponent);
    base.graph().apply(
        Op::Pow {
            base: base.id(),
            exponent,
        },
        value,
    )
}

// --- Value Method ---

impl<'g> Value<'g> {
    /// Raises this node to `exponent`. See [`pow_op`].
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, GradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
