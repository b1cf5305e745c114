//! Binary classification metrics.
//!
//! Every metric compares two 0/1 label vectors of equal length: `actual`
//! (ground truth) and `model` (predictions). Divisions are not guarded: when a
//! denominator count is zero the metric is `0/0 = NaN`, which is returned to
//! the caller as the "undefined" signal.

use log::warn;
use ndarray::{ArrayBase, Data, Ix1};
use serde::Serialize;

use crate::error::LogisticError;

/// Outcome counts of comparing `model` against `actual` position by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Count outcomes for two label vectors.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the vectors differ in length, `NonBinaryLabel` if
    /// any element of either vector is not 0 or 1.
    pub fn from_labels<S1, S2>(
        actual: &ArrayBase<S1, Ix1>,
        model: &ArrayBase<S2, Ix1>,
    ) -> Result<Self, LogisticError>
    where
        S1: Data<Elem = u8>,
        S2: Data<Elem = u8>,
    {
        if actual.len() != model.len() {
            return Err(LogisticError::LengthMismatch {
                actual: actual.len(),
                model: model.len(),
            });
        }

        let mut counts = ConfusionCounts::default();
        for (index, (&a, &m)) in actual.iter().zip(model.iter()).enumerate() {
            match (a, m) {
                (1, 1) => counts.true_positives += 1,
                (0, 0) => counts.true_negatives += 1,
                (0, 1) => counts.false_positives += 1,
                (1, 0) => counts.false_negatives += 1,
                _ => {
                    let value = if a > 1 { a } else { m };
                    return Err(LogisticError::NonBinaryLabel { index, value });
                }
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// Fraction of positions where the two vectors agree.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total(), "accuracy")
    }

    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
            "precision",
        )
    }

    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
            "recall",
        )
    }

    /// Harmonic mean of precision and recall.
    pub fn f_score(&self) -> f64 {
        harmonic_mean(self.precision(), self.recall())
    }

    pub fn fpr(&self) -> f64 {
        ratio(
            self.false_positives,
            self.false_positives + self.true_negatives,
            "fpr",
        )
    }
}

fn ratio(numerator: usize, denominator: usize, metric: &str) -> f64 {
    if denominator == 0 {
        warn!("{}: zero denominator, result is NaN", metric);
    }
    numerator as f64 / denominator as f64
}

fn harmonic_mean(p: f64, r: f64) -> f64 {
    (2.0 * p * r) / (p + r)
}

/// Fraction of positions where `actual` and `model` agree.
pub fn accuracy<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    Ok(ConfusionCounts::from_labels(actual, model)?.accuracy())
}

/// `tp / (tp + fp)`.
pub fn precision<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    Ok(ConfusionCounts::from_labels(actual, model)?.precision())
}

/// `tp / (tp + fn)`.
pub fn recall<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    Ok(ConfusionCounts::from_labels(actual, model)?.recall())
}

/// True positive rate; identical to [`recall`].
pub fn tpr<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    recall(actual, model)
}

/// `2·p·r / (p + r)` from the precision and recall of one set of counts.
pub fn f_score<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    let counts = ConfusionCounts::from_labels(actual, model)?;
    Ok(harmonic_mean(counts.precision(), counts.recall()))
}

/// False positive rate, `fp / (fp + tn)`.
pub fn fpr<S1, S2>(actual: &ArrayBase<S1, Ix1>, model: &ArrayBase<S2, Ix1>) -> Result<f64, LogisticError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
{
    Ok(ConfusionCounts::from_labels(actual, model)?.fpr())
}
