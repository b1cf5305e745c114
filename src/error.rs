use std::error::Error;
use std::fmt;

/// Errors raised when inputs do not line up.
///
/// Numeric degeneracies (0/0 in a metric, a constant feature column) are not
/// errors: they surface as `NaN` or `inf` in the returned values.
#[derive(Debug, Clone, PartialEq)]
pub enum LogisticError {
    /// Two array dimensions that must agree do not.
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },
    /// `actual` and `model` label vectors differ in length.
    LengthMismatch { actual: usize, model: usize },
    /// A label that should be 0 or 1 is something else.
    NonBinaryLabel { index: usize, value: u8 },
    /// A matrix with no rows or no columns where data is required.
    EmptyInput(&'static str),
}

impl fmt::Display for LogisticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogisticError::ShapeMismatch {
                context,
                expected,
                got,
            } => write!(f, "Shape mismatch in {}: expected {}, got {}", context, expected, got),
            LogisticError::LengthMismatch { actual, model } => write!(
                f,
                "Label vectors must have equal length (actual: {}, model: {})",
                actual, model
            ),
            LogisticError::NonBinaryLabel { index, value } => {
                write!(f, "Label at index {} is {}, expected 0 or 1", index, value)
            }
            LogisticError::EmptyInput(what) => write!(f, "Empty input: {}", what),
        }
    }
}

impl Error for LogisticError {}
