use crate::error::GradError;
use crate::graph::Graph;
use crate::nn::init::UniformInit;
use crate::nn::module::{prefixed, Module};
use crate::nn::layers::neuron::Neuron;
use crate::node::NodeId;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(graph: &Graph, nin: usize, nout: usize, init: &UniformInit) -> Result<Self, GradError> {
        Self::with_rng(graph, nin, nout, init, &mut rand::thread_rng())
    }

    /// # Errors
    /// `InvalidArchitecture` if `nin` or `nout` is 0.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nout: usize,
        init: &UniformInit,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        if nout == 0 {
            return Err(GradError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(graph, nin, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, GradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, neuron)| {
                prefixed(&format!("neurons.{}", j), neuron.named_parameters()).collect::<Vec<_>>()
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
