//! Error types for farmbook
//!
//! Library code returns `FarmError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ServiceError, StoreError};

/// Result type alias for farmbook operations
pub type FarmResult<T> = Result<T, FarmError>;

/// Main error type for farmbook operations
#[derive(Error, Debug)]
pub enum FarmError {
    /// A form value is missing or out of range
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// No record with the given id exists in the collection
    #[error("no {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// Date or month argument could not be parsed
    #[error("invalid date '{value}' (expected {expected})")]
    InvalidDate {
        value: String,
        expected: &'static str,
    },

    /// Persisted state could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A (mocked) remote service call failed
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Configuration file is not valid TOML for the expected schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The operation needs a signed-in session
    #[error("not signed in\n  → Run: farmbook login --email <EMAIL>")]
    NotSignedIn,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FarmError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FarmError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FarmError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = FarmError::validation("area", "must be between 0.1 and 10000 ha");
        assert_eq!(err.to_string(), "invalid area: must be between 0.1 and 10000 ha");
        assert!(err.is_validation());
    }

    #[test]
    fn test_error_display_not_found() {
        let err = FarmError::NotFound {
            kind: "field",
            id: "lq2x9k-ab12".to_string(),
        };
        assert_eq!(err.to_string(), "no field with id 'lq2x9k-ab12'");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = FarmError::InvalidDate {
            value: "2024-13".to_string(),
            expected: "YYYY-MM",
        };
        assert_eq!(err.to_string(), "invalid date '2024-13' (expected YYYY-MM)");
    }
}
