//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    RequiredField,

    /// The provided phone number is not exactly 10 decimal digits.
    FieldFormat {
        /// The rejected input, kept verbatim.
        value: String,
    },
}

impl ValidationError {
    /// The offending input, when the error carries one.
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::RequiredField => None,
            Self::FieldFormat { value } => Some(value),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredField => write!(f, "Required not empty field."),
            Self::FieldFormat { .. } => write!(f, "Must be exactly 10 digits."),
        }
    }
}

impl std::error::Error for ValidationError {}
