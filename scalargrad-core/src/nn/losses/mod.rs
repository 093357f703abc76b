// Loss functions built from engine operations

pub mod mse;

pub use mse::{MseLoss, Reduction};
