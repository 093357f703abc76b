use crate::node::{Node, NodeId};
use std::collections::{HashMap, HashSet};

/// Builds a topological sort of the ancestry of `root`.
///
/// Iterative post-order depth-first search: a node is emitted only after all of its
/// operands, and the visited set makes shared sub-expressions appear once.
/// Operands are explored in construction order, so the result is deterministic.
pub(crate) fn topological_sort(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, index of the next operand to explore)
    let mut stack = vec![(root, 0usize)];
    visited.insert(root);

    while let Some(top) = stack.last_mut() {
        let (id, next) = *top;
        let operands = nodes[id.0].op.operands();
        if next < operands.len() {
            top.1 += 1;
            let operand = operands[next];
            if visited.insert(operand) {
                stack.push((operand, 0));
            }
        } else {
            stack.pop();
            sorted_list.push(id);
        }
    }
    sorted_list
}

/// Propagates gradients from `root` through its ancestry and returns the number of
/// nodes visited.
///
/// Partial derivatives for this pass are accumulated in a pass-local map and added to
/// the stored gradients at the end, so a repeated pass adds exactly the same amounts.
/// The root itself is set to 1 rather than accumulated.
pub(crate) fn run_backward(nodes: &mut [Node], root: NodeId) -> usize {
    let sorted_nodes = topological_sort(nodes, root);

    let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
    grad_map.insert(root, 1.0);

    // Reverse order: every consumer runs before the operands it feeds.
    for &id in sorted_nodes.iter().rev() {
        let upstream = grad_map.get(&id).copied().unwrap_or(0.0);
        let node = &nodes[id.0];
        node.op.chain(
            node.value,
            upstream,
            |operand| nodes[operand.0].value,
            |operand, contribution| *grad_map.entry(operand).or_insert(0.0) += contribution,
        );
    }

    for &id in &sorted_nodes {
        nodes[id.0].grad += grad_map.get(&id).copied().unwrap_or(0.0);
    }
    // The root is never its own ancestor, so no other contribution is lost here.
    nodes[root.0].grad = 1.0;
    sorted_nodes.len()
}
