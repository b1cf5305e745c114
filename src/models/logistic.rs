//! Logistic regression primitives: hypothesis, cost and one gradient step.
//!
//! All functions are pure. Weights are a vector of length `n_features`, the
//! feature matrix is `(n_samples, n_features)` with column 0 conventionally a
//! constant bias column of ones, and labels are 0/1 values stored as `f64`.

use log::{debug, trace};
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use crate::error::LogisticError;
use crate::math::sigmoid_array;

fn check_weights<S1, S2>(w: &ArrayBase<S1, Ix1>, x: &ArrayBase<S2, Ix2>) -> Result<(), LogisticError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if w.len() != x.ncols() {
        return Err(LogisticError::ShapeMismatch {
            context: "weights vs feature columns",
            expected: x.ncols(),
            got: w.len(),
        });
    }
    Ok(())
}

fn check_labels<S2, S3>(x: &ArrayBase<S2, Ix2>, y: &ArrayBase<S3, Ix1>) -> Result<(), LogisticError>
where
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
{
    if y.len() != x.nrows() {
        return Err(LogisticError::ShapeMismatch {
            context: "labels vs sample rows",
            expected: x.nrows(),
            got: y.len(),
        });
    }
    Ok(())
}

/// Predicted probability of label 1 for every row of `x`.
///
/// Computes `sigmoid(x · w)`, so each element lies in the open interval (0, 1)
/// for finite inputs.
///
/// # Errors
///
/// `ShapeMismatch` if `w.len() != x.ncols()`.
pub fn hypothesis<S1, S2>(w: &ArrayBase<S1, Ix1>, x: &ArrayBase<S2, Ix2>) -> Result<Array1<f64>, LogisticError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_weights(w, x)?;
    trace!("hypothesis: x shape = {:?}, w len = {}", x.shape(), w.len());
    let z = x.dot(w);
    Ok(sigmoid_array(&z))
}

/// Average binary cross-entropy of `y` under the current weights.
///
/// Each sample contributes `-(y*ln(h + eps) + (1 - y)*ln(1 - h + eps))`. The
/// `eps` offset keeps the logarithm finite when `h` saturates, at the price of a
/// small bias: the result is not the exact cross-entropy.
///
/// `reg_param` is accepted but does not contribute to the returned value; the
/// L2 term is disabled.
///
/// An empty sample set yields `NaN` (mean over zero rows).
pub fn cost<S1, S2, S3>(
    w: &ArrayBase<S1, Ix1>,
    x: &ArrayBase<S2, Ix2>,
    y: &ArrayBase<S3, Ix1>,
    _reg_param: f64,
    eps: f64,
) -> Result<f64, LogisticError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
{
    check_labels(x, y)?;
    let h = hypothesis(w, x)?;

    let log_likelihood: f64 = y
        .iter()
        .zip(h.iter())
        .map(|(&yi, &hi)| yi * (hi + eps).ln() + (1.0 - yi) * (1.0 - hi + eps).ln())
        .sum();
    let result = -(log_likelihood / y.len() as f64);

    debug!("cost over {} samples = {}", y.len(), result);
    Ok(result)
}

/// One step of batch gradient descent.
///
/// Returns `w - learning_rate * xᵀ(h - y) / m`, where `h` is the hypothesis and
/// `m` the number of samples. Feeding the returned weights back in repeatedly
/// is training; iteration count and convergence are up to the caller.
///
/// As with [`cost`], `reg_param` is accepted and ignored.
pub fn gradient_step<S1, S2, S3>(
    w: &ArrayBase<S1, Ix1>,
    x: &ArrayBase<S2, Ix2>,
    y: &ArrayBase<S3, Ix1>,
    _reg_param: f64,
    learning_rate: f64,
) -> Result<Array1<f64>, LogisticError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
{
    check_labels(x, y)?;
    let h = hypothesis(w, x)?;

    let errors = &h - y;
    let gradient = x.t().dot(&errors) / errors.len() as f64;
    debug!(
        "gradient step: |grad| = {:.6e}, learning_rate = {}",
        gradient.dot(&gradient).sqrt(),
        learning_rate
    );

    Ok(w - &(gradient * learning_rate))
}

/// Threshold the hypothesis into 0/1 labels (`1` where `h >= threshold`).
pub fn predict_labels<S1, S2>(
    w: &ArrayBase<S1, Ix1>,
    x: &ArrayBase<S2, Ix2>,
    threshold: f64,
) -> Result<Array1<u8>, LogisticError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let h = hypothesis(w, x)?;
    Ok(h.mapv(|p| if p >= threshold { 1 } else { 0 }))
}
