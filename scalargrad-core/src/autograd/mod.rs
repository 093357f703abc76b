//! # Autograd
//!
//! Reverse-mode differentiation over the [`Graph`](crate::graph::Graph) arena.
//!
//! - [`backward`]: topological ordering of a node's ancestry and the single reverse
//!   pass that applies each node's local gradient rule exactly once.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub(crate) mod backward;
pub mod grad_check;

pub use grad_check::{check_grad, GradCheckError};
