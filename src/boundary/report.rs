//! Failure classification and the report produced for each contained failure.

use crate::error::BookError;
use std::fmt;

/// The fixed set of failure kinds the boundary recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Blank name
    RequiredField,
    /// Phone number that is not exactly 10 digits
    FieldFormat,
    /// Exact-match phone lookup miss
    PhoneNotFound,
    /// Directory key miss
    ContactNotFound,
    /// Anything else
    Unclassified,
}

impl FailureKind {
    /// All kinds, in reporting order.
    pub const ALL: [FailureKind; 5] = [
        FailureKind::RequiredField,
        FailureKind::FieldFormat,
        FailureKind::PhoneNotFound,
        FailureKind::ContactNotFound,
        FailureKind::Unclassified,
    ];

    /// Stable identifier used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredField => "required_field",
            Self::FieldFormat => "field_format",
            Self::PhoneNotFound => "phone_not_found",
            Self::ContactNotFound => "contact_not_found",
            Self::Unclassified => "unclassified",
        }
    }

    /// Whether this kind comes from bad user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::RequiredField | Self::FieldFormat)
    }

    /// Whether this kind is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound | Self::ContactNotFound)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One human-readable line describing a contained failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the operation the failure was contained in
    pub operation: String,

    /// Classification of the failure
    pub kind: FailureKind,

    /// User-facing message
    pub message: String,
}

impl Report {
    /// Classify an error and render its user-facing message.
    pub fn from_error(operation: &str, error: &BookError) -> Self {
        let kind = error.kind();
        let message = match kind {
            FailureKind::RequiredField | FailureKind::FieldFormat => {
                format!("Validation failed: {}", error)
            }
            FailureKind::PhoneNotFound => "Phone number not found.".to_string(),
            FailureKind::ContactNotFound => "Contact not found.".to_string(),
            FailureKind::Unclassified => format!("Unknown exception: {}", error),
        };

        Self {
            operation: operation.to_string(),
            kind,
            message,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
