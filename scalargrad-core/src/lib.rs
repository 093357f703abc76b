//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine with a small neural-network
//! layer on top.
//!
//! Expressions are built from [`Value`] handles into a [`Graph`] arena. Calling
//! [`Value::backward`] on the result fills in the gradient of every node it depends on:
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.var("a", 2.0);
//! let b = graph.var("b", -3.0);
//! let y = (a * b + 1.0).tanh();
//! y.backward().unwrap();
//! assert!(a.grad() < 0.0);
//! ```
//!
//! The [`nn`] module builds neurons, layers and multi-layer perceptrons whose
//! parameters are leaves of the same graph, and [`optim`] updates them.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;

pub use error::GradError;
pub use graph::{Checkpoint, Graph};
pub use node::{NodeId, Op};
pub use ops::Operand;
pub use value::Value;
