//! Custom error types for loan-report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for loan-report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Period selection rejected before filtering
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record collection could not be read
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ReportError {
    /// Create a validation error for a missing or unparsable year
    pub fn invalid_year(input: impl Into<String>) -> Self {
        let input = input.into();
        if input.trim().is_empty() {
            Self::Validation("Please select a month and a year".into())
        } else {
            Self::Validation(format!("Year must be a whole number, got '{}'", input.trim()))
        }
    }

    /// Create a validation error for a missing or unknown month
    pub fn invalid_month(input: impl Into<String>) -> Self {
        let input = input.into();
        if input.trim().is_empty() {
            Self::Validation("Please select a month and a year".into())
        } else {
            Self::Validation(format!(
                "Month must be 01-12 or 'all', got '{}'",
                input.trim()
            ))
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for loan-report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_selection_message() {
        let err = ReportError::invalid_year("  ");
        assert_eq!(
            err.to_string(),
            "Validation error: Please select a month and a year"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_month_message() {
        let err = ReportError::invalid_month("13");
        assert_eq!(
            err.to_string(),
            "Validation error: Month must be 01-12 or 'all', got '13'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
        assert!(!report_err.is_storage());
    }
}
