//! Error types for parameter construction helpers.
//!
//! Token rendering itself never fails; the only failure paths live at the
//! parsing boundary where operator, direction, and category names arrive as
//! strings (for example from configuration or user input).

use thiserror::Error;

/// Main error type for query parameter operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operator name not part of the closed vocabulary
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Sort direction other than `asc` or `desc`
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    /// Parameter category other than filters, sort, or pagination
    #[error("Unknown parameter category: {0}")]
    UnknownCategory(String),
}

/// Specialized result type for query parameter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOperator(_) => "UNKNOWN_OPERATOR",
            Self::UnknownDirection(_) => "UNKNOWN_DIRECTION",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::UnknownOperator("foo".to_string()).error_code(),
            "UNKNOWN_OPERATOR"
        );
        assert_eq!(
            Error::UnknownDirection("up".to_string()).error_code(),
            "UNKNOWN_DIRECTION"
        );
        assert_eq!(
            Error::UnknownCategory("extras".to_string()).error_code(),
            "UNKNOWN_CATEGORY"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownOperator("around".to_string());
        assert_eq!(err.to_string(), "Unknown operator: around");

        let err = Error::UnknownDirection("sideways".to_string());
        assert_eq!(err.to_string(), "Unknown sort direction: sideways");
    }
}
