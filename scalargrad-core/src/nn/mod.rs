//! Neural-network building blocks on top of the scalar engine.
//!
//! Parameters are leaf nodes of a [`Graph`](crate::graph::Graph). Modules only keep
//! their [`NodeId`](crate::node::NodeId)s, so a network can be evaluated many times
//! against the same graph and its parameters survive a
//! [`Graph::rewind`](crate::graph::Graph::rewind) to a checkpoint taken after
//! construction.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use init::UniformInit;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
