use crate::error::GradError;
use crate::node::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `relu(x) = x if x > 0 else 0`.
///
/// Gradient rule: the upstream gradient passes through when the output is positive
/// and is dropped otherwise (including at exactly 0).
pub fn relu_op(a: Value<'_>) -> Result<Value<'_>, GradError> {
    Ok(relu_node(a))
}

fn relu_node(a: Value<'_>) -> Value<'_> {
    let x = a.value();
    let value = if x > 0.0 { x } else { 0.0 };
    a.graph().apply(Op::Relu(a.id()), value)
}

// --- Value Method ---

impl<'g> Value<'g> {
    pub fn relu(self) -> Value<'g> {
        relu_node(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
