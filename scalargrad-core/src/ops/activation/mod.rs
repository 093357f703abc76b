//! # Activation Functions
//!
//! Non-linear single-operand operations. Both create a primitive node whose
//! gradient rule reads the node's own forward output.
//!
//! - [`relu_op`]: Rectified Linear Unit, `max(0, x)`.
//! - [`tanh_op`]: hyperbolic tangent.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
