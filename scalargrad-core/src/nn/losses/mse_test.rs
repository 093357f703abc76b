use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_reduction_from_str() {
    assert_eq!("sum".parse::<Reduction>(), Ok(Reduction::Sum));
    assert_eq!("Mean".parse::<Reduction>(), Ok(Reduction::Mean));
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(GradError::InvalidOperand { .. })
    ));
    assert_eq!(MseLoss::default().reduction(), Reduction::Sum);
}

#[test]
fn test_mse_sum_and_mean() -> Result<(), GradError> {
    let graph = Graph::new();
    let preds = [graph.leaf(0.5), graph.leaf(-1.0)];
    let targets = [1.0, 1.0];

    let sum = MseLoss::new(Reduction::Sum).calculate(&preds, &targets)?;
    assert_relative_eq!(sum.value(), 0.25 + 4.0);

    let mean = MseLoss::new(Reduction::Mean).calculate(&preds, &targets)?;
    assert_relative_eq!(mean.value(), 4.25 / 2.0);
    Ok(())
}

#[test]
fn test_mse_backward() -> Result<(), GradError> {
    // d/dp (p - t)^2 = 2 (p - t)
    let graph = Graph::new();
    let preds = [graph.leaf(0.5), graph.leaf(-1.0)];
    let loss = MseLoss::new(Reduction::Mean).calculate(&preds, &[1.0, 1.0])?;
    loss.backward()?;
    assert_relative_eq!(preds[0].grad(), 2.0 * -0.5 / 2.0);
    assert_relative_eq!(preds[1].grad(), 2.0 * -2.0 / 2.0);
    Ok(())
}

#[test]
fn test_mse_errors() {
    let graph = Graph::new();
    let preds = [graph.leaf(0.5)];
    let loss = MseLoss::default();
    assert_eq!(
        loss.calculate(&preds, &[1.0, 2.0]),
        Err(GradError::InputSizeMismatch {
            expected: 1,
            actual: 2,
            operation: "MseLoss calculate".to_string()
        })
    );
    assert!(matches!(
        loss.calculate(&[], &[]),
        Err(GradError::EmptyBatch { .. })
    ));
}
