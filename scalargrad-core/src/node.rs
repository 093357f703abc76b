//! # Computation nodes
//!
//! A node is one scalar quantity stored in a [`Graph`](crate::graph::Graph) arena.
//! It is either a leaf (an input, parameter or constant) or the result of one of the
//! primitive operations described by [`Op`]. Composite operations (negation,
//! subtraction, division) never appear here: they are built from `Add`, `Mul` and
//! `Pow` nodes and inherit their gradient rules.

use std::fmt;

/// Stable index of a node inside its graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The primitive operation that produced a node.
///
/// The backward traversal dispatches on this tag to apply the matching local
/// gradient rule, so each node carries everything needed to propagate to its
/// operands without a stored closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or constant. Has no operands.
    Leaf,
    Add([NodeId; 2]),
    Mul([NodeId; 2]),
    /// `base ** exponent` for a real exponent.
    Pow { base: NodeId, exponent: f64 },
    Relu(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Direct inputs of the operation, in construction order.
    pub fn operands(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(ids) | Op::Mul(ids) => ids,
            Op::Pow { base, .. } => std::slice::from_ref(base),
            Op::Relu(a) | Op::Tanh(a) => std::slice::from_ref(a),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short symbol used in debug output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(_) => "+",
            Op::Mul(_) => "*",
            Op::Pow { .. } => "**",
            Op::Relu(_) => "relu",
            Op::Tanh(_) => "tanh",
        }
    }

    /// Applies the local gradient rule of this operation.
    ///
    /// `out_value` is the forward result cached on the node, `upstream` is the
    /// node's accumulated gradient for the current pass and `value_of` reads an
    /// operand's forward value. `emit` receives each operand together with the
    /// contribution to add to its gradient. An operand used twice (e.g. `x * x`)
    /// is emitted twice.
    pub(crate) fn chain(
        &self,
        out_value: f64,
        upstream: f64,
        value_of: impl Fn(NodeId) -> f64,
        mut emit: impl FnMut(NodeId, f64),
    ) {
        match *self {
            Op::Leaf => {}
            Op::Add([a, b]) => {
                emit(a, upstream);
                emit(b, upstream);
            }
            Op::Mul([a, b]) => {
                emit(a, value_of(b) * upstream);
                emit(b, value_of(a) * upstream);
            }
            Op::Pow { base, exponent } => {
                let local = exponent * value_of(base).powf(exponent - 1.0);
                emit(base, local * upstream);
            }
            Op::Relu(a) => {
                let local = if out_value > 0.0 { 1.0 } else { 0.0 };
                emit(a, local * upstream);
            }
            // Uses the cached output t = tanh(x): d/dx tanh(x) = 1 - t^2.
            Op::Tanh(a) => emit(a, (1.0 - out_value * out_value) * upstream),
        }
    }
}

/// One entry of the graph arena.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, label: Option<String>) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label,
        }
    }
}
