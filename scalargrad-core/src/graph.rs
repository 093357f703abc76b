//! # Graph arena
//!
//! [`Graph`] owns every node created while evaluating expressions. Nodes refer to
//! their operands by [`NodeId`], an index into the arena, so shared sub-expressions
//! need no reference counting and the whole graph is torn down as a unit.
//!
//! Operands are always pushed before the nodes that consume them, so every operand
//! has a smaller index than its consumer and the graph cannot contain a cycle.
//!
//! All building and reading goes through `&Graph`. Only [`Graph::rewind`] takes
//! `&mut self`, which guarantees that no [`Value`] handle survives the nodes it
//! points to.

use crate::autograd::backward::{run_backward, topological_sort};
use crate::error::GradError;
use crate::node::{Node, NodeId, Op};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io::Write;

/// Arena holding the nodes of one or more expressions.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

/// Recorded arena length, see [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn len(self) -> usize {
        self.0
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Creates an unlabelled leaf node.
    pub fn leaf(&self, value: f64) -> Value<'_> {
        self.push(Node::new(value, Op::Leaf, None))
    }

    /// Creates a labelled leaf node.
    pub fn var(&self, label: impl Into<String>, value: f64) -> Value<'_> {
        self.push(Node::new(value, Op::Leaf, Some(label.into())))
    }

    /// Creates a leaf for a raw number taking part in an operation.
    /// The label is the number rounded to two decimals.
    pub fn constant(&self, value: f64) -> Value<'_> {
        self.push(Node::new(value, Op::Leaf, Some(rounded(value))))
    }

    /// Appends the result of a primitive operation, labelled after its operands
    /// (`a*b`, `relu(#4)`).
    pub(crate) fn apply(&self, op: Op, value: f64) -> Value<'_> {
        let label = describe(&self.nodes.borrow(), op);
        self.push(Node::new(value, op, label))
    }

    fn push(&self, node: Node) -> Value<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        Value::new(self, id)
    }

    pub(crate) fn same_as(&self, other: &Graph) -> bool {
        std::ptr::eq(self, other)
    }

    fn check(&self, id: NodeId) -> Result<(), GradError> {
        let len = self.len();
        if id.0 < len {
            Ok(())
        } else {
            Err(GradError::UnknownNode { id, len })
        }
    }

    /// Reads a node that a live handle points to. Handles cannot outlive their nodes,
    /// see [`Graph::rewind`].
    pub(crate) fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&Node) -> R) -> R {
        f(&self.nodes.borrow()[id.0])
    }

    /// Returns a handle to an existing node.
    pub fn get(&self, id: NodeId) -> Result<Value<'_>, GradError> {
        self.check(id)?;
        Ok(Value::new(self, id))
    }

    pub fn value(&self, id: NodeId) -> Result<f64, GradError> {
        self.check(id)?;
        Ok(self.with_node(id, |n| n.value))
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, GradError> {
        self.check(id)?;
        Ok(self.with_node(id, |n| n.grad))
    }

    pub fn op(&self, id: NodeId) -> Result<Op, GradError> {
        self.check(id)?;
        Ok(self.with_node(id, |n| n.op))
    }

    pub fn label(&self, id: NodeId) -> Result<Option<String>, GradError> {
        self.check(id)?;
        Ok(self.with_node(id, |n| n.label.clone()))
    }

    pub fn set_label(&self, id: NodeId, label: impl Into<String>) -> Result<(), GradError> {
        self.check(id)?;
        self.nodes.borrow_mut()[id.0].label = Some(label.into());
        Ok(())
    }

    /// Overwrites the value of a leaf node, e.g. for a gradient-descent update.
    ///
    /// Nodes already computed from this leaf keep their old value; rebuild the
    /// expression to see the new one.
    pub fn set_value(&self, id: NodeId, value: f64) -> Result<(), GradError> {
        self.check(id)?;
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[id.0];
        if !node.op.is_leaf() {
            return Err(GradError::NonLeafMutation { id });
        }
        node.value = value;
        Ok(())
    }

    /// Resets the gradient of every listed node to 0.
    /// Nothing is reset if any id is unknown.
    pub fn zero_grad(&self, ids: impl IntoIterator<Item = NodeId>) -> Result<(), GradError> {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        for &id in &ids {
            self.check(id)?;
        }
        let mut nodes = self.nodes.borrow_mut();
        for id in ids {
            nodes[id.0].grad = 0.0;
        }
        Ok(())
    }

    pub fn zero_all_grads(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Runs reverse-mode differentiation from `root`.
    ///
    /// The gradient of `root` is set to 1, and every other node in its ancestry has
    /// `∂root/∂node` added to its gradient. Those are not reset first: call
    /// [`Graph::zero_grad`] between passes.
    pub fn backward(&self, root: NodeId) -> Result<(), GradError> {
        self.check(root)?;
        let mut nodes = self.nodes.borrow_mut();
        if nodes[root.0].op.is_leaf() {
            log::debug!("backward() called on leaf {}. Only its own gradient is set.", root);
        }
        let visited = run_backward(&mut nodes, root);
        log::debug!("backward() from {} visited {} nodes", root, visited);
        Ok(())
    }

    /// Ancestry of `root` ordered so that every node comes after all of its operands.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, GradError> {
        self.check(root)?;
        Ok(topological_sort(&self.nodes.borrow(), root))
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.len())
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Training loops take a checkpoint once the parameters exist and rewind after
    /// each step, so the arena does not grow with the number of iterations.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), GradError> {
        let nodes = self.nodes.get_mut();
        if checkpoint.0 > nodes.len() {
            return Err(GradError::InvalidCheckpoint {
                checkpoint: checkpoint.0,
                len: nodes.len(),
            });
        }
        log::debug!(
            "Rewinding graph from {} to {} nodes",
            nodes.len(),
            checkpoint.0
        );
        nodes.truncate(checkpoint.0);
        Ok(())
    }

    /// Write graphviz dot file of the ancestry of `root` to the given writer.
    pub fn to_dot(&self, root: NodeId, writer: &mut impl Write) -> std::io::Result<()> {
        let order = self
            .topological_order(root)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
        let nodes = self.nodes.borrow();
        writeln!(writer, "digraph G {{\nrankdir=\"LR\";")?;
        for id in &order {
            let node = &nodes[id.0];
            let name = match &node.label {
                Some(label) => label.clone(),
                None => format!("a{}", id.0),
            };
            writeln!(
                writer,
                "a{} [label=\"{} \\ndata:{}, grad:{}\"];",
                id.0, name, node.value, node.grad
            )?;
        }
        let mut edges = HashSet::new();
        for id in &order {
            for operand in nodes[id.0].op.operands() {
                if edges.insert((operand.0, id.0)) {
                    writeln!(writer, "a{} -> a{};", operand.0, id.0)?;
                }
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }
}

fn rounded(value: f64) -> String {
    ((value * 100.0).round() / 100.0).to_string()
}

/// Name of an operand inside an operation label. Only leaf labels are inlined, so
/// labels stay short however deep the expression is.
fn operand_name(nodes: &[Node], id: NodeId) -> String {
    match &nodes[id.0] {
        Node {
            op: Op::Leaf,
            label: Some(label),
            ..
        } => label.clone(),
        _ => id.to_string(),
    }
}

fn describe(nodes: &[Node], op: Op) -> Option<String> {
    let name = |id| operand_name(nodes, id);
    let symbol = op.symbol();
    match op {
        Op::Leaf => None,
        Op::Add([a, b]) | Op::Mul([a, b]) => Some(format!("{}{}{}", name(a), symbol, name(b))),
        Op::Pow { base, exponent } => {
            Some(format!("{}{}{}", name(base), symbol, rounded(exponent)))
        }
        Op::Relu(a) | Op::Tanh(a) => Some(format!("{}({})", symbol, name(a))),
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
