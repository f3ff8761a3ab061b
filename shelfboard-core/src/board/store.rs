//! Ordered, in-memory book store

use crate::error::StoreError;
use crate::types::{BookId, BookRecord};
use serde::{Deserialize, Serialize};

/// Ordered list of every book on the board.
///
/// Order is the within-column display order interleaved across all
/// statuses. The store is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookStore {
    books: Vec<BookRecord>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records in order
    pub fn from_records(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.books
    }

    /// Book at a global index
    pub fn get(&self, index: usize) -> Option<&BookRecord> {
        self.books.get(index)
    }

    /// Global index of the book with the given id
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    pub fn find(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a book to the end of the store
    pub fn push(&mut self, book: BookRecord) {
        self.books.push(book);
    }

    /// Remove exactly the book at a global index
    pub fn remove_at(&mut self, index: usize) -> Result<BookRecord, StoreError> {
        if index >= self.books.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.books.len(),
            });
        }
        Ok(self.books.remove(index))
    }

    /// Remove the book with the given id
    pub fn remove(&mut self, id: BookId) -> Result<BookRecord, StoreError> {
        let index = self.position(id).ok_or(StoreError::UnknownBook(id))?;
        Ok(self.books.remove(index))
    }
}

impl<'a> IntoIterator for &'a BookStore {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl FromIterator<BookRecord> for BookStore {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn sample() -> BookStore {
        BookStore::from_records(vec![
            BookRecord::new("T1", "A1", Status::ToRead),
            BookRecord::new("T2", "A2", Status::Reading),
            BookRecord::new("T3", "A3", Status::Completed),
        ])
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let mut store = sample();
        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed.title, "T2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().title, "T1");
        assert_eq!(store.get(1).unwrap().title, "T3");
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = sample();
        let err = store.remove_at(3).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = sample();
        let id = store.get(2).unwrap().id;

        store.remove(id).unwrap();
        assert!(store.find(id).is_none());
        assert_eq!(store.remove(id), Err(StoreError::UnknownBook(id)));
    }

    #[test]
    fn test_push_appends() {
        let mut store = BookStore::new();
        assert!(store.is_empty());

        store.push(BookRecord::new("T1", "A1", Status::ToRead));
        store.push(BookRecord::new("T2", "A2", Status::ToRead));
        let titles: Vec<_> = store.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["T1", "T2"]);
    }
}
