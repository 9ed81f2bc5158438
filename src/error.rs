//! Custom error types for Business Center
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Business Center operations
#[derive(Error, Debug)]
pub enum BusinessError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input (negative amounts, bad row indexes, malformed items)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A row index that does not exist in a store
    #[error("{category} item {index} does not exist (store has {len} items)")]
    ItemOutOfRange {
        category: &'static str,
        index: usize,
        len: usize,
    },

    /// Line item input file errors
    #[error("Import error: {0}")]
    Import(String),

    /// The tabular encoder or the output file failed
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BusinessError {
    /// Create a validation error for a negative amount
    pub fn negative_amount(name: &str) -> Self {
        if name.is_empty() {
            Self::Validation("Amount cannot be negative".into())
        } else {
            Self::Validation(format!("Amount for '{}' cannot be negative", name))
        }
    }

    /// Create a validation error for an item that would overflow its store total
    pub fn total_overflow(category: &str, name: &str) -> Self {
        if name.is_empty() {
            Self::Validation(format!("Amount is too large for the {} total", category))
        } else {
            Self::Validation(format!(
                "Amount for '{}' is too large for the {} total",
                name, category
            ))
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ItemOutOfRange { .. })
    }

    /// Check if this is an export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl From<std::io::Error> for BusinessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BusinessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for BusinessError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Business Center operations
pub type BusinessResult<T> = Result<T, BusinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BusinessError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = BusinessError::negative_amount("Rent");
        assert_eq!(
            err.to_string(),
            "Validation error: Amount for 'Rent' cannot be negative"
        );
        assert!(err.is_validation());

        let err = BusinessError::negative_amount("");
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative");
    }

    #[test]
    fn test_total_overflow_error() {
        let err = BusinessError::total_overflow("Revenue", "Sales");
        assert_eq!(
            err.to_string(),
            "Validation error: Amount for 'Sales' is too large for the Revenue total"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_error() {
        let err = BusinessError::ItemOutOfRange {
            category: "Revenue",
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Revenue item 4 does not exist (store has 2 items)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BusinessError = io_err.into();
        assert!(matches!(err, BusinessError::Io(_)));
        assert!(!err.is_export());
    }
}
