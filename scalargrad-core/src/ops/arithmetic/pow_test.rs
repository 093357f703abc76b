use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    assert_eq!(pow_op(x, 2.0)?.value(), 9.0);
    assert_relative_eq!(x.pow(0.5)?.value(), 3.0_f64.sqrt());
    assert_relative_eq!(x.pow(-1.0)?.value(), 1.0 / 3.0);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), GradError> {
    // d(x^3)/dx = 3x^2
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = x.pow(3.0)?;
    y.backward()?;
    assert_eq!(y.value(), 8.0);
    assert_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_backward_grad_check() -> Result<(), GradCheckError> {
    check_grad(|_, x| x[0].pow(-1.5), &[1.7], 1e-6, 1e-4)?;
    check_grad(|_, x| x[0].pow(2.25), &[0.8], 1e-6, 1e-4)
}

#[test]
fn test_pow_node_exponent_is_invalid() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let p = graph.leaf(3.0);
    let len_before = graph.len();
    let result = pow_op(x, p);
    assert!(matches!(
        result,
        Err(GradError::InvalidOperand { ref operation, .. }) if operation == "pow"
    ));
    // Nothing is appended on failure
    assert_eq!(graph.len(), len_before);
}

#[test]
fn test_pow_non_finite_exponent_is_invalid() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    assert!(matches!(x.pow(f64::NAN), Err(GradError::InvalidOperand { .. })));
    assert!(matches!(x.pow(f64::INFINITY), Err(GradError::InvalidOperand { .. })));
}

#[test]
fn test_pow_of_zero_with_negative_exponent_is_infinite() -> Result<(), GradError> {
    let graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = x.pow(-1.0)?;
    assert!(y.value().is_infinite());
    y.backward()?;
    assert!(!x.grad().is_finite());
    Ok(())
}
