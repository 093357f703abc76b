use crate::error::GradError;
use crate::graph::Graph;
use crate::nn::init::UniformInit;
use crate::nn::layers::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::node::NodeId;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Multi-Layer Perceptron: layers of tanh neurons applied in sequence.
///
/// `Mlp::new(&graph, 3, &[4, 4, 1], &init)` builds a network reading 3 inputs with two
/// hidden layers of width 4 and a single output.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new(
        graph: &Graph,
        nin: usize,
        sizes: &[usize],
        init: &UniformInit,
    ) -> Result<Self, GradError> {
        Self::with_rng(graph, nin, sizes, init, &mut rand::thread_rng())
    }

    /// Creates the network, drawing every parameter from `rng` layer by layer.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nin` is 0, `sizes` is empty or contains a 0;
    /// `InvalidInitRange` for a bad range.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        sizes: &[usize],
        init: &UniformInit,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        init.validate()?;
        if nin == 0 {
            return Err(GradError::InvalidArchitecture(
                "the network needs at least one input".to_string(),
            ));
        }
        if sizes.is_empty() {
            return Err(GradError::InvalidArchitecture(
                "the network needs at least one layer".to_string(),
            ));
        }
        if let Some(k) = sizes.iter().position(|&n| n == 0) {
            return Err(GradError::InvalidArchitecture(format!(
                "layer {} has zero width",
                k
            )));
        }

        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = nin;
        for &nout in sizes {
            layers.push(Layer::with_rng(graph, fan_in, nout, init, rng)?);
            fan_in = nout;
        }
        let mlp = Mlp { layers };
        log::debug!(
            "Created {} with {} parameters (init range [{}, {}])",
            mlp,
            mlp.num_parameters(),
            init.low,
            init.high
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.layers[self.layers.len() - 1].nout()
    }

    /// Wraps raw numbers in fresh leaves and runs a forward pass.
    pub fn forward_scalars<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[f64],
    ) -> Result<Vec<Value<'g>>, GradError> {
        let inputs: Vec<Value<'g>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
        self.forward(graph, &inputs)
    }
}

impl Module for Mlp {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, GradError> {
        if inputs.len() != self.nin() {
            return Err(GradError::InputSizeMismatch {
                expected: self.nin(),
                actual: inputs.len(),
                operation: "Mlp::forward".to_string(),
            });
        }
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, layer)| {
                prefixed(&format!("layers.{}", k), layer.named_parameters()).collect::<Vec<_>>()
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}
