//! Summary of every metric for one set of predictions.
use std::fmt;

use log::info;
use ndarray::{ArrayBase, Data, Ix1};
use serde::Serialize;

use crate::error::LogisticError;
use crate::metrics::ConfusionCounts;

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub counts: ConfusionCounts,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
    pub fpr: f64,
}

impl ClassificationReport {
    /// Build the report from ground-truth and predicted 0/1 labels.
    pub fn from_labels<S1, S2>(
        actual: &ArrayBase<S1, Ix1>,
        model: &ArrayBase<S2, Ix1>,
    ) -> Result<Self, LogisticError>
    where
        S1: Data<Elem = u8>,
        S2: Data<Elem = u8>,
    {
        let counts = ConfusionCounts::from_labels(actual, model)?;
        let report = Self::from_counts(counts);
        info!(
            "Evaluated {} predictions: accuracy = {:.4}, f_score = {:.4}",
            counts.total(),
            report.accuracy,
            report.f_score
        );
        Ok(report)
    }

    pub fn from_counts(counts: ConfusionCounts) -> Self {
        Self {
            counts,
            accuracy: counts.accuracy(),
            precision: counts.precision(),
            recall: counts.recall(),
            f_score: counts.f_score(),
            fpr: counts.fpr(),
        }
    }

    /// True positive rate, same value as `recall`.
    pub fn tpr(&self) -> f64 {
        self.recall
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Classification Report -----")?;
        writeln!(
            f,
            "TP: {}  FP: {}  TN: {}  FN: {}",
            self.counts.true_positives,
            self.counts.false_positives,
            self.counts.true_negatives,
            self.counts.false_negatives
        )?;
        writeln!(f, "accuracy:  {:.4}", self.accuracy)?;
        writeln!(f, "precision: {:.4}", self.precision)?;
        writeln!(f, "recall:    {:.4}", self.recall)?;
        writeln!(f, "f_score:   {:.4}", self.f_score)?;
        writeln!(f, "fpr:       {:.4}", self.fpr)?;
        write!(f, "---------------------------------")
    }
}
