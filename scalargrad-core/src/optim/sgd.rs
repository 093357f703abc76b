use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::optim::optimizer_trait::Optimizer;

/// Plain Stochastic Gradient Descent: `p.value -= lr * p.grad`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
    steps: usize,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `lr` is not a finite positive number.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, GradError> {
        validate_lr(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
            steps: 0,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), GradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

fn validate_lr(lr: f64) -> Result<(), GradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(GradError::InvalidHyperparameter {
            name: "lr".to_string(),
            value: lr,
        })
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &Graph) -> Result<(), GradError> {
        // Compute every update first so a bad parameter leaves all values untouched.
        let mut updates = Vec::with_capacity(self.params.len());
        for &id in &self.params {
            if !graph.op(id)?.is_leaf() {
                return Err(GradError::NonLeafMutation { id });
            }
            let updated = graph.value(id)? - self.lr * graph.grad(id)?;
            if !updated.is_finite() {
                log::warn!(
                    "SGD step {}: parameter {} became {} (grad = {})",
                    self.steps,
                    id,
                    updated,
                    graph.grad(id)?
                );
            }
            updates.push((id, updated));
        }
        for (id, value) in updates {
            graph.set_value(id, value)?;
        }
        self.steps += 1;
        log::debug!(
            "SGD step {}: updated {} parameters (lr = {})",
            self.steps,
            self.params.len(),
            self.lr
        );
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
