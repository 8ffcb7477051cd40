//! Error types for decimal statistics.

use thiserror::Error;

/// Errors that can occur while parsing decimals or computing statistics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A summary was requested over zero values.
    #[error("cannot summarize an empty dataset")]
    EmptyDataset,

    /// Text could not be parsed as a base-10 decimal literal.
    #[error("invalid decimal literal '{value}'")]
    InvalidDecimal { value: String },

    /// Division with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The floating-point square root step produced NaN or infinity.
    #[error("non-finite result while computing {operation}")]
    NonFinite { operation: &'static str },
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::InvalidDecimal {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid decimal literal 'abc'");
        assert_eq!(
            StatsError::EmptyDataset.to_string(),
            "cannot summarize an empty dataset"
        );
    }
}
