//! Keyed collection of contact records.

use crate::boundary::ErrorBoundary;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;

/// Records keyed by contact name.
///
/// Keys are unique: adding a record under an existing name replaces the old
/// record and keeps the key's original position. Iteration follows insertion
/// order.
///
/// # Example
///
/// ```
/// use contact_book::{Directory, Record};
///
/// let mut directory = Directory::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890");
/// directory.add(john);
///
/// assert!(directory.find("John").is_some());
/// assert!(directory.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: HashMap<String, Record>,
    order: Vec<String>,
    boundary: ErrorBoundary,
}

impl Directory {
    /// Create an empty directory with the default boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory whose lookups report through `boundary`.
    pub fn with_boundary(boundary: ErrorBoundary) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            boundary,
        }
    }

    /// The boundary this directory reports through.
    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    /// Insert a record under its name, replacing any record already there.
    ///
    /// Returns the replaced record, if any. Replacement is not reported.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);

        if previous.is_some() {
            tracing::debug!(contact = %key, "Replaced existing contact");
        } else {
            tracing::debug!(contact = %key, "Added contact");
            self.order.push(key);
        }

        previous
    }

    /// Look up a record by name.
    pub fn try_find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record by name and return it.
    pub fn try_delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        tracing::debug!(contact = %name, "Deleted contact");
        Ok(record)
    }

    /// Find a record; a miss is reported.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.boundary.contain("find", self.try_find(name))
    }

    /// Find a record for editing; a miss is reported.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let result = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()));
        self.boundary.contain("find", result)
    }

    /// Delete a record; a miss is reported and nothing changes.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let result = self.try_delete(name);
        self.boundary.contain("delete", result)
    }

    /// Check whether a record is stored under `name`. Never reports.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            records: &self.records,
        }
    }
}

/// Iterator over the entries of a [`Directory`] in insertion order.
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        self.keys
            .by_ref()
            .find_map(|key| records.get(key).map(|record| (key.as_str(), record)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.keys.size_hint().1)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::MemorySink;

    fn directory() -> (Directory, MemorySink) {
        let sink = MemorySink::new();
        (
            Directory::with_boundary(ErrorBoundary::with_sink(sink.clone())),
            sink,
        )
    }

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone);
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let (mut directory, sink) = directory();
        assert!(directory.add(record("John", &["1234567890"])).is_none());

        let found = directory.find("John").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1234567890");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_find_missing_is_contained() {
        let (directory, sink) = directory();
        assert!(directory.find("Nobody").is_none());
        assert_eq!(sink.messages(), vec!["Contact not found."]);
    }

    #[test]
    fn test_find_is_exact_match() {
        let (mut directory, sink) = directory();
        directory.add(record("John", &[]));
        assert!(directory.find("john").is_none());
        assert!(directory.find("John ").is_none());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let (mut directory, sink) = directory();
        directory.add(record("John", &["1234567890"]));
        directory.add(record("Jane", &["9876543210"]));

        let previous = directory.add(record("John", &["5555555555"])).unwrap();
        assert_eq!(previous.phones()[0].as_str(), "1234567890");

        assert_eq!(directory.len(), 2);
        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert_eq!(
            directory.find("John").unwrap().phones()[0].as_str(),
            "5555555555"
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_entries() {
        let (mut directory, sink) = directory();
        directory.add(record("John", &[]));

        assert!(directory.delete("Jane").is_none());
        assert_eq!(directory.len(), 1);
        assert!(directory.contains("John"));
        assert_eq!(sink.messages(), vec!["Contact not found."]);
    }

    #[test]
    fn test_delete_then_readd_moves_to_end() {
        let (mut directory, _) = directory();
        directory.add(record("A", &[]));
        directory.add(record("B", &[]));
        directory.delete("A").unwrap();
        directory.add(record("A", &[]));

        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let (mut directory, _) = directory();
        directory.add(record("John", &["1234567890"]));

        directory
            .find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333");

        assert_eq!(
            directory.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_try_forms_do_not_report() {
        let (mut directory, sink) = directory();
        assert!(matches!(
            directory.try_find("x"),
            Err(BookError::ContactNotFound(name)) if name == "x"
        ));
        assert!(directory.try_delete("x").is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_into_iterator() {
        let (mut directory, _) = directory();
        directory.add(record("John", &[]));
        directory.add(record("Jane", &[]));

        let mut count = 0;
        for (name, record) in &directory {
            assert_eq!(name, record.name().as_str());
            count += 1;
        }
        assert_eq!(count, 2);
        assert!(!directory.is_empty());
    }
}
