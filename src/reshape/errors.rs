//! Reshape error types
//!
//! Error codes:
//! - BIBLESHAPE_EMPTY_INPUT
//! - BIBLESHAPE_INVALID_DOCUMENT
//! - BIBLESHAPE_MALFORMED_RECORD
//! - BIBLESHAPE_INVALID_CHAPTER
//!
//! Every error is fatal to the conversion. No partial document is produced.

use thiserror::Error;

/// Result type for reshape operations
pub type ReshapeResult<T> = Result<T, ReshapeError>;

/// Reshape errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReshapeError {
    /// No verses present (missing, null or empty `verses`)
    #[error("No verses found in input")]
    EmptyInput,

    /// Input is not a document of the expected shape
    #[error("Invalid input document: {0}")]
    InvalidDocument(String),

    /// A verse record lacks a required field or has the wrong type for it
    #[error("Malformed verse record at index {index}: field '{field}' is missing or not a {expected}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// Chapter is not a positive integer in the accepted range
    #[error("Invalid chapter at index {index}: {value}")]
    InvalidChapter { index: usize, value: String },
}

impl ReshapeError {
    /// Get the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ReshapeError::EmptyInput => "BIBLESHAPE_EMPTY_INPUT",
            ReshapeError::InvalidDocument(_) => "BIBLESHAPE_INVALID_DOCUMENT",
            ReshapeError::MalformedRecord { .. } => "BIBLESHAPE_MALFORMED_RECORD",
            ReshapeError::InvalidChapter { .. } => "BIBLESHAPE_INVALID_CHAPTER",
        }
    }

    /// Index of the offending verse record, if the error concerns one
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ReshapeError::MalformedRecord { index, .. }
            | ReshapeError::InvalidChapter { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn malformed(index: usize, field: &'static str, expected: &'static str) -> Self {
        ReshapeError::MalformedRecord {
            index,
            field,
            expected,
        }
    }

    pub(crate) fn invalid_chapter(index: usize, value: impl ToString) -> Self {
        ReshapeError::InvalidChapter {
            index,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ReshapeError::EmptyInput.code(), "BIBLESHAPE_EMPTY_INPUT");
        assert_eq!(
            ReshapeError::InvalidDocument("x".into()).code(),
            "BIBLESHAPE_INVALID_DOCUMENT"
        );
        assert_eq!(
            ReshapeError::malformed(0, "text", "string").code(),
            "BIBLESHAPE_MALFORMED_RECORD"
        );
        assert_eq!(
            ReshapeError::invalid_chapter(0, 0).code(),
            "BIBLESHAPE_INVALID_CHAPTER"
        );
    }

    #[test]
    fn test_malformed_display_names_field_and_index() {
        let err = ReshapeError::malformed(7, "book_name", "string");
        let display = err.to_string();
        assert!(display.contains("index 7"));
        assert!(display.contains("book_name"));
        assert_eq!(err.record_index(), Some(7));
    }

    #[test]
    fn test_empty_input_has_no_index() {
        assert_eq!(ReshapeError::EmptyInput.record_index(), None);
    }
}
