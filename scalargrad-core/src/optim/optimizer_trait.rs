use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently stored in
    /// `graph`.
    ///
    /// # Errors
    /// `UnknownNode` or `NonLeafMutation` if a managed parameter is not a leaf of
    /// `graph`. No parameter is modified in that case.
    fn step(&mut self, graph: &Graph) -> Result<(), GradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self, graph: &Graph) -> Result<(), GradError> {
        graph.zero_grad(self.params().iter().copied())
    }

    fn params(&self) -> &[NodeId];
}
