//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::boundary::FailureKind;
use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on records and the directory.
#[derive(Error, Debug)]
pub enum BookError {
    /// A name or phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone in the record matched exactly
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No contact is stored under the key
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Any other failure surfacing inside a contained operation
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BookError {
    /// Classify this error for reporting.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(ValidationError::RequiredField) => FailureKind::RequiredField,
            Self::Validation(ValidationError::FieldFormat { .. }) => FailureKind::FieldFormat,
            Self::PhoneNotFound(_) => FailureKind::PhoneNotFound,
            Self::ContactNotFound(_) => FailureKind::ContactNotFound,
            Self::Other(_) => FailureKind::Unclassified,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = BookError::ContactNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Contact not found: Jane");

        let err = BookError::from(ValidationError::RequiredField);
        assert_eq!(err.to_string(), "Required not empty field.");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: unknown level");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            BookError::from(ValidationError::RequiredField).kind(),
            FailureKind::RequiredField
        );
        assert_eq!(
            BookError::from(ValidationError::FieldFormat {
                value: "1".to_string()
            })
            .kind(),
            FailureKind::FieldFormat
        );
        assert_eq!(
            BookError::PhoneNotFound(String::new()).kind(),
            FailureKind::PhoneNotFound
        );
        assert_eq!(
            BookError::ContactNotFound(String::new()).kind(),
            FailureKind::ContactNotFound
        );
        assert_eq!(
            BookError::from(anyhow::anyhow!("boom")).kind(),
            FailureKind::Unclassified
        );
    }
}
