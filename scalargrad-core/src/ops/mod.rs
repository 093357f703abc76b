//! # Operations Module (`ops`)
//!
//! Every differentiable operation has an explicit function (named `xxx_op`) that
//! validates its operands, computes the forward value and appends the result node to
//! the graph. Operator overloads (`+`, `-`, `*`, `/`, unary `-`) on [`Value`] and the
//! `relu`/`tanh`/`pow` methods delegate to these functions.
//!
//! Only `add`, `mul`, `pow`, `relu` and `tanh` create primitive nodes with their own
//! gradient rule. `neg`, `sub` and `div` are compositions of those primitives.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`activation`]: relu, tanh.

pub mod activation;
pub mod arithmetic;

use crate::error::GradError;
use crate::graph::Graph;
use crate::value::Value;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};

/// Second operand of an operation: a node or a raw number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Scalar(f64),
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(scalar: f64) -> Self {
        Operand::Scalar(scalar)
    }
}

/// Checks that a node operand lives in `graph`.
pub(crate) fn ensure_same_graph<'g>(
    graph: &'g Graph,
    value: Value<'g>,
    operation: &str,
) -> Result<Value<'g>, GradError> {
    if graph.same_as(value.graph()) {
        Ok(value)
    } else {
        Err(GradError::GraphMismatch {
            operation: operation.to_string(),
        })
    }
}

/// Turns an operand into a node of `graph`, wrapping raw numbers in a constant leaf.
pub(crate) fn resolve<'g>(
    graph: &'g Graph,
    operand: Operand<'g>,
    operation: &str,
) -> Result<Value<'g>, GradError> {
    match operand {
        Operand::Node(value) => ensure_same_graph(graph, value, operation),
        Operand::Scalar(scalar) => Ok(graph.constant(scalar)),
    }
}
