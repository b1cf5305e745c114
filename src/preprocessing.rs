//! Mean/range feature normalization.
//!
//! Every column is rescaled to `(x - mean) / (max - min)` except column 0,
//! which holds the bias term and is passed through unchanged. A `RangeScaler`
//! keeps the fitted statistics so a matrix seen later (e.g. a held-out split)
//! can be transformed with the statistics of the training matrix.

use log::warn;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};

use crate::error::LogisticError;

/// Per-column means and ranges fitted on a feature matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeScaler {
    pub mean: Array1<f64>,
    pub range: Array1<f64>,
}

impl RangeScaler {
    /// Index of the bias column left untouched by the transform.
    pub const BIAS_COLUMN: usize = 0;

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// Fit a `RangeScaler` from a matrix where rows are samples and columns are
/// features.
///
/// The bias column gets mean 0 and range 1. A non-bias column with zero range
/// is kept as is; transforming it divides by zero and yields `NaN`/`inf`.
pub fn fit_range_scaler<S>(x: &ArrayBase<S, Ix2>) -> Result<RangeScaler, LogisticError>
where
    S: Data<Elem = f64>,
{
    if x.ncols() == 0 {
        return Err(LogisticError::EmptyInput("feature matrix has no columns"));
    }
    let mut mean = x
        .mean_axis(Axis(0))
        .ok_or(LogisticError::EmptyInput("feature matrix has no rows"))?;

    let mins = x.fold_axis(Axis(0), f64::INFINITY, |&acc, &v| acc.min(v));
    let maxs = x.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v));
    let mut range = maxs - mins;

    range[RangeScaler::BIAS_COLUMN] = 1.0;
    mean[RangeScaler::BIAS_COLUMN] = 0.0;

    for (col, &r) in range.iter().enumerate().skip(1) {
        if r == 0.0 {
            warn!("Feature column {} is constant (zero range); normalized values will be NaN", col);
        }
    }

    Ok(RangeScaler { mean, range })
}

/// Transform all rows using the provided `RangeScaler` and return a new matrix.
pub fn transform_all<S>(x: &ArrayBase<S, Ix2>, sc: &RangeScaler) -> Result<Array2<f64>, LogisticError>
where
    S: Data<Elem = f64>,
{
    if x.ncols() != sc.n_features() {
        return Err(LogisticError::ShapeMismatch {
            context: "scaler features vs matrix columns",
            expected: sc.n_features(),
            got: x.ncols(),
        });
    }
    Ok((x - &sc.mean) / &sc.range)
}

/// Fit on `x` and transform `x` in one call.
///
/// Column 0 of the result equals column 0 of the input exactly; every other
/// column has mean ≈ 0 and spans at most one unit.
pub fn mean_normalization<S>(x: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, LogisticError>
where
    S: Data<Elem = f64>,
{
    let sc = fit_range_scaler(x)?;
    transform_all(x, &sc)
}
