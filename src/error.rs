//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Amount text that could not be parsed, or parsed to a negative number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date text that does not match dd/MM/yyyy or names an impossible date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Failure to read or decode the persisted expense file
    #[error("Failed to load expenses: {0}")]
    Load(String),

    /// Failure to persist the expense file
    #[error("Failed to save expenses: {0}")]
    Save(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ExpenseError {
    /// Create an "invalid amount" error from the raw input
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::InvalidAmount(raw.into())
    }

    /// Create an "invalid date" error from the raw input
    pub fn invalid_date(raw: impl Into<String>) -> Self {
        Self::InvalidDate(raw.into())
    }

    /// Check if this is a validation error (bad user input, never fatal)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidDate(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::invalid_amount("abc");
        assert_eq!(err.to_string(), "Invalid amount: abc");

        let err = ExpenseError::invalid_date("31/02/2024");
        assert_eq!(err.to_string(), "Invalid date: 31/02/2024");
    }

    #[test]
    fn test_is_validation() {
        assert!(ExpenseError::invalid_amount("-50").is_validation());
        assert!(ExpenseError::invalid_date("nope").is_validation());
        assert!(!ExpenseError::Save("disk full".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
