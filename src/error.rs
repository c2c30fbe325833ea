// Validation errors for presenter input.
//
// The presenter itself never fails on well-formed input. These errors are
// raised when a record is missing a key, has the wrong type, or carries a
// similarity outside [0, 1]. Indexes are 1-based, matching rendered numbering.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresentError {
    #[error("{record} #{index} is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{record} #{index} has similarity {value}, expected a value in [0, 1]")]
    InvalidRange {
        record: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{record} #{index} field `{field}` must be {expected}")]
    InvalidType {
        record: &'static str,
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// Reject similarities outside [0, 1] (NaN included).
pub(crate) fn check_similarity(
    record: &'static str,
    index: usize,
    value: f64,
) -> Result<(), PresentError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PresentError::InvalidRange {
            record,
            index,
            value,
        })
    }
}
