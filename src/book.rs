//! Record store
//!
//! The in-memory telephone book. Loaded fresh on every invocation,
//! mutated in place and written back by the codec.

use crate::error::BookResult;
use crate::record::Record;
use tracing::debug;

/// Ordered collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    records: Vec<Record>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the book.
    ///
    /// Fails with `BookError::Resource` when the allocator cannot grow the store.
    pub fn add(&mut self, record: Record) -> BookResult<()> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(())
    }

    /// Remove the first record carrying `id`
    pub fn remove_by_id(&mut self, id: i64) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Sort by last name, then first name
    pub fn sort(&mut self) {
        self.records.sort_by(Record::cmp_by_name);
    }

    /// Assign IDs `1..=N` in current order
    pub fn renumber(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            record.id = index as i64 + 1;
        }
    }

    /// Sort then renumber, the state every command persists
    pub fn normalize(&mut self) {
        self.sort();
        self.renumber();
        debug!("Normalized book of {} records", self.records.len());
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Book {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Book {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Book {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        [
            Record::new("Smith", "Ann", "555", 1),
            Record::new("Smith", "Bob", "556", 2),
            Record::new("Jones", "Cy", "557", 3),
        ]
        .into_iter()
        .collect()
    }

    fn names(book: &Book) -> Vec<(&str, &str)> {
        book.iter()
            .map(|r| (r.last_name.as_str(), r.first_name.as_str()))
            .collect()
    }

    #[test]
    fn test_add_appends() {
        let mut book = sample();
        book.add(Record::new("Adams", "Zed", "1", Record::UNASSIGNED_ID))
            .unwrap();
        assert_eq!(book.size(), 4);
        assert_eq!(book.records()[3].last_name, "Adams");
    }

    #[test]
    fn test_normalize_sorts_then_numbers() {
        let mut book = sample();
        book.normalize();
        assert_eq!(
            names(&book),
            vec![("Jones", "Cy"), ("Smith", "Ann"), ("Smith", "Bob")]
        );
        let ids: Vec<i64> = book.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_added_placeholder_is_numbered() {
        let mut book = sample();
        book.normalize();
        book.add(Record::new("Brown", "Al", "9", Record::UNASSIGNED_ID))
            .unwrap();
        book.normalize();
        assert_eq!(book.records()[0].last_name, "Brown");
        assert!(book.iter().all(|r| r.id > 0));
        let ids: Vec<i64> = book.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut book = sample();
        book.sort();
        let once = book.clone();
        book.sort();
        assert_eq!(book, once);
    }

    #[test]
    fn test_renumber_follows_current_order() {
        let mut book = sample();
        book.renumber();
        book.renumber();
        assert_eq!(book.records()[2].last_name, "Jones");
        assert_eq!(book.records()[2].id, 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut book = sample();
        let removed = book.remove_by_id(2).unwrap();
        assert_eq!(removed.first_name, "Bob");
        assert_eq!(book.size(), 2);
        assert!(book.remove_by_id(2).is_none());
        assert!(book.remove_by_id(42).is_none());
    }

    #[test]
    fn test_remove_then_renumber_closes_gap() {
        let mut book = sample();
        book.remove_by_id(2);
        book.renumber();
        assert_eq!(names(&book), vec![("Smith", "Ann"), ("Jones", "Cy")]);
        assert_eq!(book.records()[1].id, 2);
    }

    #[test]
    fn test_empty_book() {
        let mut book = Book::new();
        book.normalize();
        assert!(book.is_empty());
        assert_eq!(book.size(), 0);
    }
}
