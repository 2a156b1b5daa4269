//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
///
/// The rule engines themselves are total over well-formed input; these
/// errors only surface at construction seams (label parsing, score bounds).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has no vocabulary entry for '{value}'")]
    UnknownLabel { field: String, value: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an unknown label validation error.
    pub fn unknown_label(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownLabel {
            field: field.into(),
            value: value.into(),
        }
    }
}
