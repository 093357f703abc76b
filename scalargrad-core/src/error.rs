use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine and its neural-network layer.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradError {
    #[error("Invalid operand for {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Operand of {operation} belongs to a different graph")]
    GraphMismatch { operation: String },

    #[error("Unknown node {id}: graph holds {len} nodes")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Cannot overwrite the value of non-leaf node {id}")]
    NonLeafMutation { id: NodeId },

    #[error("Invalid checkpoint: recorded length {checkpoint} exceeds current length {len}")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Invalid initialization range [{low}, {high}]")]
    InvalidInitRange { low: f64, high: f64 },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Input size mismatch: expected {expected}, got {actual} during {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot compute {operation} over an empty batch")]
    EmptyBatch { operation: String },

    #[error("Invalid hyperparameter {name} = {value}")]
    InvalidHyperparameter { name: String, value: f64 },
}
