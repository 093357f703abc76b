use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module, appending its nodes to `graph`.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `inputs` does not match the module's input width,
    /// `UnknownNode` if a parameter id is out of range for `graph`.
    ///
    /// Parameters are plain node ids: `graph` must be the graph the module was built
    /// on. Another graph holding enough nodes is not detected.
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, GradError>;

    /// Returns all learnable parameters along with their names.
    /// Names follow the module hierarchy, e.g. `layers.1.neurons.0.w.2`.
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Returns all learnable parameters, weights before bias, in declaration order.
    fn parameters(&self) -> Vec<NodeId> {
        self.named_parameters()
            .into_iter()
            .map(|(_, id)| id)
            .collect()
    }

    fn num_parameters(&self) -> usize {
        self.named_parameters().len()
    }

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self, graph: &Graph) -> Result<(), GradError> {
        graph.zero_grad(self.parameters())
    }
}

/// Prefixes every parameter name of a child module.
pub(crate) fn prefixed(
    prefix: &str,
    named: Vec<(String, NodeId)>,
) -> impl Iterator<Item = (String, NodeId)> + '_ {
    named
        .into_iter()
        .map(move |(name, id)| (format!("{}.{}", prefix, name), id))
}
