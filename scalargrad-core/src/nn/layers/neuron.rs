use crate::error::GradError;
use crate::graph::Graph;
use crate::nn::init::UniformInit;
use crate::nn::module::Module;
use crate::node::NodeId;
use crate::ops::{add_op, mul_op, tanh_op};
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single tanh unit: `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, initialized with the thread-local RNG.
    pub fn new(graph: &Graph, nin: usize, init: &UniformInit) -> Result<Self, GradError> {
        Self::with_rng(graph, nin, init, &mut rand::thread_rng())
    }

    /// Creates a neuron drawing its weights, then its bias, from `rng`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nin` is 0, `InvalidInitRange` for a bad range.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        init: &UniformInit,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        if nin == 0 {
            return Err(GradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let values = init.sample_n(rng, nin + 1)?;
        let weights = values[..nin]
            .iter()
            .map(|&w| graph.leaf(w).id())
            .collect();
        let bias = graph.leaf(values[nin]).id();
        Ok(Neuron { weights, bias })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Computes the activation for one set of inputs.
    ///
    /// # Errors
    /// `InputSizeMismatch` for the wrong number of inputs, `UnknownNode` if a
    /// parameter id is out of range for `graph`, `GraphMismatch` if an input belongs
    /// to another graph.
    pub fn activate<'g>(&self, graph: &'g Graph, inputs: &[Value<'g>]) -> Result<Value<'g>, GradError> {
        if inputs.len() != self.weights.len() {
            return Err(GradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        // The sum starts from the bias.
        let mut act = graph.get(self.bias)?;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = mul_op(graph.get(w)?, x)?;
            act = add_op(act, wx)?;
        }
        tanh_op(act)
    }
}

impl Module for Neuron {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, GradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w.{}", i), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TanhNeuron({})", self.weights.len())
    }
}
