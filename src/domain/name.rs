//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// A name must contain something other than whitespace. The value is stored
/// exactly as given; surrounding whitespace is only ignored for the check.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert!(Name::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RequiredField` if the name is empty or
    /// whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Jane").unwrap();
        assert_eq!(name.as_str(), "Jane");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(Name::new(""), Err(ValidationError::RequiredField));
        assert_eq!(Name::new("   "), Err(ValidationError::RequiredField));
        assert_eq!(Name::new("\t\n"), Err(ValidationError::RequiredField));
    }

    #[test]
    fn test_name_stored_untrimmed() {
        let name = Name::new("  John  ").unwrap();
        assert_eq!(name.as_str(), "  John  ");
    }

    #[test]
    fn test_name_try_from() {
        let name = Name::try_from("Ada").unwrap();
        assert_eq!(name.into_inner(), "Ada");
        assert!(Name::try_from(" ").is_err());
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("John").unwrap();
        assert_eq!(format!("{}", name), "John");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("John").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"John\"");
    }

    #[test]
    fn test_name_deserialization_blank_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
