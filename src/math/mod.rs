//! Scalar and element-wise math used by the model functions.
pub mod activation;

pub use activation::{sigmoid, sigmoid_array};
