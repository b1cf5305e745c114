use anyhow::{Context, Result};
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};

use crate::error::LogisticError;
use crate::models::logistic;

pub const DEFAULT_REG_PARAM: f64 = 0.1;
pub const DEFAULT_EPS: f64 = 0.01;
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Tunable scalars shared by [`logistic::cost`] and [`logistic::gradient_step`].
///
/// `reg_param` is carried for API compatibility only: neither the cost nor
/// the gradient applies a regularization term.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HyperParams {
    pub reg_param: f64,
    pub eps: f64,
    pub learning_rate: f64,
}

impl HyperParams {
    pub fn new(reg_param: f64, eps: f64, learning_rate: f64) -> Self {
        Self {
            reg_param,
            eps,
            learning_rate,
        }
    }

    /// Parse a JSON document. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse hyper-parameters")
    }

    /// [`logistic::cost`] with this configuration's `reg_param` and `eps`.
    pub fn cost<S1, S2, S3>(
        &self,
        w: &ArrayBase<S1, Ix1>,
        x: &ArrayBase<S2, Ix2>,
        y: &ArrayBase<S3, Ix1>,
    ) -> Result<f64, LogisticError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        S3: Data<Elem = f64>,
    {
        logistic::cost(w, x, y, self.reg_param, self.eps)
    }

    /// [`logistic::gradient_step`] with this configuration's `reg_param` and `learning_rate`.
    pub fn gradient_step<S1, S2, S3>(
        &self,
        w: &ArrayBase<S1, Ix1>,
        x: &ArrayBase<S2, Ix2>,
        y: &ArrayBase<S3, Ix1>,
    ) -> Result<Array1<f64>, LogisticError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        S3: Data<Elem = f64>,
    {
        logistic::gradient_step(w, x, y, self.reg_param, self.learning_rate)
    }
}

impl Default for HyperParams {
    fn default() -> Self {
        Self {
            reg_param: DEFAULT_REG_PARAM,
            eps: DEFAULT_EPS,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}
