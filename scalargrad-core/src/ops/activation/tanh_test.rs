use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() -> Result<(), GradError> {
    let graph = Graph::new();
    assert_eq!(tanh_op(graph.leaf(0.0))?.value(), 0.0);
    assert_relative_eq!(graph.leaf(0.5).tanh().value(), 0.46211715726000974);
    assert_relative_eq!(graph.leaf(-0.5).tanh().value(), -0.46211715726000974);
    Ok(())
}

#[test]
fn test_tanh_saturates_without_nan() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(1000.0);
    let y = x.tanh();
    assert_eq!(y.value(), 1.0);
    y.backward()?;
    assert_eq!(x.grad(), 0.0);
    Ok(())
}

#[test]
fn test_tanh_backward() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(0.8814);
    let y = x.tanh();
    y.backward()?;
    let t = y.value();
    assert_relative_eq!(x.grad(), 1.0 - t * t);
    Ok(())
}

#[test]
fn test_tanh_grad_check() -> Result<(), GradCheckError> {
    // The classic single neuron: tanh(x1*w1 + x2*w2 + b)
    check_grad(
        |_, x| Ok((x[0] * x[1] + x[2] * x[3] + x[4]).tanh()),
        &[2.0, -3.0, 0.0, 1.0, 6.881_373_587_019_543],
        1e-6,
        1e-4,
    )
}
