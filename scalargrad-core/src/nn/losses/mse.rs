use crate::error::GradError;
use crate::ops::arithmetic::{add_op, div_op, pow_op, sub_op};
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = GradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(GradError::InvalidOperand {
                operation: "MseLoss".to_string(),
                reason: format!("unsupported reduction type: {}", s),
            }),
        }
    }
}

/// Squared error between predictions and targets: `Σ (pred - target)²`, divided by
/// the batch size for [`Reduction::Mean`].
///
/// The loss is an ordinary node of the predictions' graph, so a backward pass from it
/// reaches every parameter that produced them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// # Errors
    /// `InputSizeMismatch` if the slices differ in length, `EmptyBatch` if both are
    /// empty, `GraphMismatch` if predictions come from different graphs.
    pub fn calculate<'g>(&self, preds: &[Value<'g>], targets: &[f64]) -> Result<Value<'g>, GradError> {
        if preds.len() != targets.len() {
            return Err(GradError::InputSizeMismatch {
                expected: preds.len(),
                actual: targets.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        let mut terms = preds
            .iter()
            .zip(targets)
            .map(|(&pred, &target)| pow_op(sub_op(pred, target)?, 2.0));
        let mut total = match terms.next() {
            Some(first) => first?,
            None => {
                return Err(GradError::EmptyBatch {
                    operation: "MseLoss calculate".to_string(),
                })
            }
        };
        for term in terms {
            total = add_op(total, term?)?;
        }
        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => div_op(total, preds.len() as f64),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
