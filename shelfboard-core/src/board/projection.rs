//! Column projection: the three lists the board displays

use super::BookStore;
use crate::types::{BookRecord, Status};
use serde::Serialize;

/// Books with the given status, in store order
pub fn column(store: &BookStore, status: Status) -> Vec<&BookRecord> {
    store.iter().filter(|b| b.status == status).collect()
}

/// Number of books in a column
pub fn column_len(store: &BookStore, status: Status) -> usize {
    store.iter().filter(|b| b.status == status).count()
}

/// A rendered card
#[derive(Debug, Clone, Serialize)]
pub struct Card<'a> {
    /// Position in the store, used as the render key and for deletion
    pub global_index: usize,

    /// Position within the card's column
    pub local_index: usize,

    #[serde(flatten)]
    pub book: &'a BookRecord,
}

/// One rendered column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    pub status: Status,
    pub cards: Vec<Card<'a>>,
}

impl ColumnView<'_> {
    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.book.title.as_str()).collect()
    }
}

/// The whole board, derived from the store without touching it
#[derive(Debug, Clone, Serialize)]
pub struct BoardView<'a> {
    pub columns: [ColumnView<'a>; 3],
}

impl<'a> BoardView<'a> {
    /// Project the store into three columns in `Status::ALL` order.
    ///
    /// Malformed records are left out of the cards but still take up their
    /// column slot, so card local indices agree with the index translator.
    pub fn project(store: &'a BookStore) -> Self {
        let columns = Status::ALL.map(|status| ColumnView {
            status,
            cards: Vec::new(),
        });
        let mut view = Self { columns };
        let mut counts = [0usize; 3];

        for (global_index, book) in store.iter().enumerate() {
            let slot = book.status.column();
            let local_index = counts[slot];
            counts[slot] += 1;

            if !book.is_renderable() {
                continue;
            }
            view.columns[slot].cards.push(Card {
                global_index,
                local_index,
                book,
            });
        }

        view
    }

    pub fn column(&self, status: Status) -> &ColumnView<'a> {
        &self.columns[status.column()]
    }
}
