//! Record model: one contact with its phone numbers.

use crate::boundary::ErrorBoundary;
use crate::domain::{Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact: a validated name and an ordered list of phone numbers.
///
/// Phone operations come in two forms. The `try_*` methods return the error
/// to the caller. The plain methods run through the record's
/// [`ErrorBoundary`]: a failure is reported once and the call yields `None`.
///
/// Phones are not deduplicated. All lookups compare the full stored string.
#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    boundary: ErrorBoundary,
}

impl Record {
    /// Create a record with the default boundary.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RequiredField` if the name is blank. This is
    /// not contained by any boundary.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_boundary(name, ErrorBoundary::default())
    }

    /// Create a record whose operations report through `boundary`.
    pub fn with_boundary(
        name: impl Into<String>,
        boundary: ErrorBoundary,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            boundary,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The boundary this record reports through.
    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    /// Position of the first phone equal to `phone`.
    fn phone_index(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    /// Validate and append a phone number.
    pub fn try_add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone once `phone` is known to be present.
    ///
    /// The element removed is always the last one in the list, wherever the
    /// match was found.
    pub fn try_remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        self.phone_index(phone)?;
        let removed = self
            .phones
            .pop()
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        tracing::debug!(contact = %self.name, phone = %removed, "Removed phone");
        Ok(removed)
    }

    /// Replace `old` with a validated `new`, keeping its position.
    ///
    /// Returns the phone that was replaced.
    pub fn try_edit_phone(&mut self, old: &str, new: &str) -> BookResult<Phone> {
        let index = self.phone_index(old)?;
        let phone = Phone::new(new)?;
        tracing::debug!(contact = %self.name, old = %old, new = %phone, "Editing phone");
        Ok(std::mem::replace(&mut self.phones[index], phone))
    }

    /// Look up a phone by exact match.
    pub fn try_find_phone(&self, phone: &str) -> BookResult<&Phone> {
        let index = self.phone_index(phone)?;
        Ok(&self.phones[index])
    }

    /// Add a phone; a malformed number is reported and ignored.
    pub fn add_phone(&mut self, phone: &str) -> Option<()> {
        let result = self.try_add_phone(phone);
        self.boundary.contain("add_phone", result)
    }

    /// Remove a phone; a miss is reported and nothing changes.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let result = self.try_remove_phone(phone);
        self.boundary.contain("remove_phone", result)
    }

    /// Edit a phone; a miss or a malformed replacement is reported and nothing changes.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Option<Phone> {
        let result = self.try_edit_phone(old, new);
        self.boundary.contain("edit_phone", result)
    }

    /// Find a phone; a miss is reported.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.boundary.contain("find_phone", self.try_find_phone(phone))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.phones == other.phones
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

/// Wire shape of a record.
#[derive(Serialize)]
struct RecordView<'a> {
    name: &'a Name,
    phones: &'a [Phone],
}

#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RecordView {
            name: &self.name,
            phones: &self.phones,
        }
        .serialize(serializer)
    }
}

// Deserialized records use the default boundary
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = RecordData::deserialize(deserializer)?;
        Ok(Self {
            name: data.name,
            phones: data.phones,
            boundary: ErrorBoundary::default(),
        })
    }
}
