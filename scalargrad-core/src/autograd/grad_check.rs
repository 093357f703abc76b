use crate::error::GradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check setting {name} = {value}")]
    InvalidSetting { name: &'static str, value: f64 },
}

impl From<GradError> for GradCheckError {
    fn from(err: GradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`. It is
/// evaluated once with a backward pass to obtain the analytical gradients, then twice
/// per input on fresh graphs with that input shifted by `±epsilon`.
///
/// An input passes when the two gradients are within `tolerance`, either absolutely
/// or relative to the larger magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, GradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidSetting {
            name: "epsilon",
            value: epsilon,
        });
    }
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(GradCheckError::InvalidSetting {
            name: "tolerance",
            value: tolerance,
        });
    }

    // --- Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- Numerical gradients ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_shifted(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Forward-only evaluation with one input shifted by `delta`.
fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, GradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}
