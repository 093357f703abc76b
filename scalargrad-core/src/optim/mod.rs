//! Optimizers for training networks built on the scalar engine.
//!
//! An optimizer holds the [`NodeId`](crate::node::NodeId)s of the parameters it
//! updates and applies its rule to their values once a backward pass has filled their
//! gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
