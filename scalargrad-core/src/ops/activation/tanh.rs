use crate::error::GradError;
use crate::node::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the hyperbolic tangent.
///
/// The forward value comes from [`f64::tanh`], which saturates to ±1 for large inputs
/// instead of overflowing. The gradient rule `1 - t^2` reads the cached output `t`.
pub fn tanh_op(a: Value<'_>) -> Result<Value<'_>, GradError> {
    Ok(tanh_node(a))
}

fn tanh_node(a: Value<'_>) -> Value<'_> {
    let value = a.value().tanh();
    a.graph().apply(Op::Tanh(a.id()), value)
}

// --- Value Method ---

impl<'g> Value<'g> {
    pub fn tanh(self) -> Value<'g> {
        tanh_node(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
