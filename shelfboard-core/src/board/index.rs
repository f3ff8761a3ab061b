//! Translation between column-local and store-global positions

use super::BookStore;
use crate::types::{BookRecord, Status};

/// Store index of the `local`-th book in the `status` column.
///
/// Returns `None` when the column holds `local` books or fewer.
pub fn global_index(store: &BookStore, status: Status, local: usize) -> Option<usize> {
    nth_with_status(store.records(), status, local)
}

/// Column and column-local position of the book at a store index
pub fn local_index(store: &BookStore, global: usize) -> Option<(Status, usize)> {
    let status = store.get(global)?.status;
    let local = store.records()[..global]
        .iter()
        .filter(|b| b.status == status)
        .count();
    Some((status, local))
}

/// Where a book dropped at `local` in the `status` column lands in `books`.
///
/// This is the position of the `local`-th book with that status, or the end
/// of the list when the column runs out first.
pub fn insertion_point(books: &[BookRecord], status: Status, local: usize) -> usize {
    nth_with_status(books, status, local).unwrap_or(books.len())
}

fn nth_with_status(books: &[BookRecord], status: Status, n: usize) -> Option<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, b)| b.status == status)
        .nth(n)
        .map(|(i, _)| i)
}
