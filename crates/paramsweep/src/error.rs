//! Error types for sweep operations.

use thiserror::Error;

/// Result type alias for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors that can occur while generating or extracting sweep variants.
///
/// Every failure aborts the whole call; no partial results are produced.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The base document text failed to deserialize.
    #[error("invalid base document: {detail}")]
    InvalidDocument {
        /// Parse error detail from the deserializer.
        detail: String,
    },

    /// A values segment or generator notation failed to parse.
    #[error("invalid values: {input}")]
    InvalidValues {
        /// The offending input text.
        input: String,
    },

    /// No parameter slot was active.
    #[error("at least one parameter must be specified")]
    NoParameters,

    /// Grid columns outside the supported range.
    #[error("grid columns must be between 1 and 20, got {columns}")]
    InvalidGridColumns {
        /// The rejected column count.
        columns: u32,
    },

    /// The extractor input did not deserialize into a variant list.
    #[error("invalid variants payload: {detail}")]
    InvalidVariants {
        /// Parse error detail from the deserializer.
        detail: String,
    },

    /// The extractor index is outside the variant list.
    #[error("variant index {index} out of range (max: {max})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The largest valid index, `-1` for an empty list.
        max: i64,
    },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SweepError {
    /// Create an invalid document error.
    #[inline]
    pub fn invalid_document(detail: impl Into<String>) -> Self {
        SweepError::InvalidDocument {
            detail: detail.into(),
        }
    }

    /// Create an invalid values error.
    #[inline]
    pub fn invalid_values(input: impl Into<String>) -> Self {
        SweepError::InvalidValues {
            input: input.into(),
        }
    }

    /// Create an invalid grid columns error.
    #[inline]
    pub fn invalid_grid_columns(columns: u32) -> Self {
        SweepError::InvalidGridColumns { columns }
    }

    /// Create an invalid variants error.
    #[inline]
    pub fn invalid_variants(detail: impl Into<String>) -> Self {
        SweepError::InvalidVariants {
            detail: detail.into(),
        }
    }

    /// Create an index out of range error for a list of length `len`.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        SweepError::IndexOutOfRange {
            index,
            max: len as i64 - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_values_carries_input() {
        let err = SweepError::invalid_values("x");
        assert_eq!(err.to_string(), "invalid values: x");
    }

    #[test]
    fn test_index_out_of_range_reports_max() {
        let err = SweepError::index_out_of_range(6, 6);
        assert_eq!(err.to_string(), "variant index 6 out of range (max: 5)");
    }

    #[test]
    fn test_index_out_of_range_empty_list() {
        let err = SweepError::index_out_of_range(0, 0);
        assert!(err.to_string().contains("max: -1"));
    }
}
