//! logreg-toolkit: building blocks for binary logistic regression.
//!
//! This crate provides the logistic hypothesis, a cross-entropy cost, a single
//! batch gradient-descent step, mean/range feature normalization and a set of
//! classification metrics. Every operation is a pure function over `ndarray`
//! inputs; driving a training loop or an evaluation harness is left to the
//! caller (see `demos/synthetic_training.rs`).
pub mod config;
pub mod error;
pub mod math;
pub mod metrics;
pub mod models;
pub mod preprocessing;
pub mod report;

pub use config::HyperParams;
pub use error::LogisticError;
pub use models::logistic::{cost, gradient_step, hypothesis, predict_labels};
