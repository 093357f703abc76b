use crate::error::GradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use std::fmt;

/// Handle to a node of a [`Graph`].
///
/// `Value` is `Copy` and borrows the graph, so expressions are written with plain
/// arithmetic operators (`a * b + 2.0`) while the graph owns the nodes. Operations are
/// defined in [`crate::ops`]; the methods here read and update the node itself.
///
/// # Panics
/// The operators `+ - * /` panic when the two operands belong to different graphs.
/// Use the `_op` functions to get the error instead.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward result of the node.
    pub fn value(&self) -> f64 {
        self.graph.with_node(self.id, |n| n.value)
    }

    /// Gradient accumulated by backward passes so far.
    pub fn grad(&self) -> f64 {
        self.graph.with_node(self.id, |n| n.grad)
    }

    pub fn op(&self) -> Op {
        self.graph.with_node(self.id, |n| n.op)
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.with_node(self.id, |n| n.label.clone())
    }

    pub fn operands(&self) -> Vec<Value<'g>> {
        self.op()
            .operands()
            .iter()
            .map(|&id| Value::new(self.graph, id))
            .collect()
    }

    /// Computes the gradient of this node with respect to every node it depends on.
    /// See [`Graph::backward`].
    pub fn backward(&self) -> Result<(), GradError> {
        self.graph.backward(self.id)
    }

    pub fn zero_grad(&self) -> Result<(), GradError> {
        self.graph.zero_grad([self.id])
    }

    /// Overwrites the value of a leaf node. See [`Graph::set_value`].
    pub fn set_value(&self, value: f64) -> Result<(), GradError> {
        self.graph.set_value(self.id, value)
    }
}

/// Two handles are equal when they point to the same node of the same graph.
/// Numeric equality is not node identity.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.graph.same_as(other.graph) && self.id == other.id
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value(), self.grad())
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
