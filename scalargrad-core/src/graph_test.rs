use super::*;

#[test]
fn test_leaf_var_and_constant() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    let a = graph.leaf(1.5);
    let b = graph.var("b", -2.0);
    let c = graph.constant(1.0 / 3.0);
    assert_eq!(graph.len(), 3);
    assert!(a.is_leaf() && b.is_leaf() && c.is_leaf());
    assert_eq!(a.label(), None);
    assert_eq!(b.label().as_deref(), Some("b"));
    assert_eq!(c.label().as_deref(), Some("0.33"));
    assert_eq!(c.value(), 1.0 / 3.0);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn test_operation_labels_name_their_operands() {
    let graph = Graph::new();
    let a = graph.var("a", 2.0);
    let b = graph.var("b", -1.0);
    let unnamed = graph.leaf(0.5);
    let ab = a * b;
    assert_eq!(ab.label().as_deref(), Some("a*b"));
    assert_eq!((a + 1.0).label().as_deref(), Some("a+1"));
    assert_eq!(a.pow(-1.0).map(|v| v.label()), Ok(Some("a**-1".to_string())));
    // Non-leaf and unlabelled operands appear by id
    let expected = format!("relu({})", ab.id());
    assert_eq!(ab.relu().label(), Some(expected));
    assert_eq!(unnamed.tanh().label(), Some(format!("tanh({})", unnamed.id())));
}

#[test]
fn test_get_unknown_node() {
    let graph = Graph::new();
    graph.leaf(1.0);
    let result = graph.get(NodeId(5));
    assert_eq!(
        result.map(|v| v.id()),
        Err(GradError::UnknownNode {
            id: NodeId(5),
            len: 1
        })
    );
    assert!(graph.value(NodeId(1)).is_err());
    assert!(graph.backward(NodeId(1)).is_err());
}

#[test]
fn test_get_returns_same_node() -> Result<(), GradError> {
    let graph = Graph::new();
    let a = graph.var("a", 4.0);
    let again = graph.get(a.id())?;
    assert_eq!(again, a);
    assert_eq!(graph.value(a.id())?, 4.0);
    assert_eq!(graph.op(a.id())?, Op::Leaf);
    Ok(())
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(1.0);
    assert_ne!(a, b);
    let other = Graph::new();
    assert_ne!(a, other.leaf(1.0));
}

#[test]
fn test_set_value_on_leaf_only() -> Result<(), GradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = a * 2.0;
    a.set_value(3.0)?;
    assert_eq!(a.value(), 3.0);
    // Already computed nodes keep their value
    assert_eq!(b.value(), 2.0);
    assert_eq!(
        b.set_value(0.0),
        Err(GradError::NonLeafMutation { id: b.id() })
    );
    Ok(())
}

#[test]
fn test_set_label() -> Result<(), GradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    graph.set_label(a.id(), "weight")?;
    assert_eq!(graph.label(a.id())?.as_deref(), Some("weight"));
    Ok(())
}

#[test]
fn test_zero_grad() -> Result<(), GradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    (a * b).backward()?;
    assert_eq!(a.grad(), 3.0);

    graph.zero_grad([a.id()])?;
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 2.0);

    // An unknown id leaves every gradient untouched
    assert!(graph.zero_grad([b.id(), NodeId(99)]).is_err());
    assert_eq!(b.grad(), 2.0);

    graph.zero_all_grads();
    assert_eq!(b.grad(), 0.0);
    Ok(())
}

#[test]
fn test_backward_on_leaf_seeds_itself() -> Result<(), GradError> {
    let graph = Graph::new();
    let a = graph.leaf(7.0);
    a.backward()?;
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_repeated_backward_keeps_root_gradient_at_one() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    let y = x * x + x;
    y.backward()?;
    y.backward()?;
    assert_eq!(y.grad(), 1.0);
    // dy/dx = 2x + 1 = 7, twice
    assert_eq!(x.grad(), 14.0);
    Ok(())
}

#[test]
fn test_backward_on_leaf_with_prior_gradient_sets_it() -> Result<(), GradError> {
    let graph = Graph::new();
    let leaf = graph.leaf(3.0);
    (leaf * 2.0).backward()?;
    assert_eq!(leaf.grad(), 2.0);
    leaf.backward()?;
    assert_eq!(leaf.grad(), 1.0);
    Ok(())
}

#[test]
fn test_topological_order_lists_operands_first() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let unrelated = graph.leaf(5.0);
    let s = x * x;
    let y = s + s * x;
    let order = graph.topological_order(y.id())?;

    assert!(!order.contains(&unrelated.id()));
    assert_eq!(order.last(), Some(&y.id()));
    let mut unique = order.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), order.len());
    for (pos, id) in order.iter().enumerate() {
        for operand in graph.op(*id)?.operands() {
            let operand_pos = order.iter().position(|o| o == operand);
            assert!(matches!(operand_pos, Some(p) if p < pos));
        }
    }
    Ok(())
}

#[test]
fn test_checkpoint_and_rewind() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let w = graph.var("w", 0.5).id();
    let checkpoint = graph.checkpoint();
    assert_eq!(checkpoint.len(), 1);
    {
        let w = graph.get(w)?;
        let loss = (w * 3.0).tanh();
        loss.backward()?;
    }
    assert!(graph.len() > 1);
    let grad = graph.grad(w)?;

    graph.rewind(checkpoint)?;
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.value(w)?, 0.5);
    assert_eq!(graph.grad(w)?, grad);
    Ok(())
}

#[test]
fn test_rewind_to_future_checkpoint_fails() {
    let mut longer = Graph::new();
    longer.leaf(1.0);
    longer.leaf(2.0);
    let checkpoint = longer.checkpoint();
    let mut graph = Graph::new();
    graph.leaf(1.0);
    assert_eq!(
        graph.rewind(checkpoint),
        Err(GradError::InvalidCheckpoint {
            checkpoint: 2,
            len: 1
        })
    );
    assert_eq!(graph.len(), 1);
    longer.rewind(checkpoint).unwrap();
}

#[test]
fn test_to_dot() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::new();
    let a = graph.var("a", 2.0);
    let b = a * a;
    b.backward()?;
    let mut out = Vec::new();
    graph.to_dot(b.id(), &mut out)?;
    let dot = String::from_utf8(out)?;

    assert!(dot.starts_with("digraph G {\nrankdir=\"LR\";\n"));
    assert!(dot.contains("a0 [label=\"a \\ndata:2, grad:4\"];"));
    assert!(dot.contains("a1 [label=\"a*a \\ndata:4, grad:1\"];"));
    // x * x has a single edge
    assert_eq!(dot.matches("a0 -> a1;").count(), 1);
    assert!(dot.trim_end().ends_with('}'));
    Ok(())
}
