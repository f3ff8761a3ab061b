//! The book store and the three-column layout derived from it
//!
//! The store is a single flat list. Columns are views over it, so every
//! drag event arrives in column-local positions and has to be translated
//! back into store positions before the store can be reordered.

mod index;
mod projection;
mod reconcile;
mod store;

pub use index::{global_index, insertion_point, local_index};
pub use projection::{column, column_len, BoardView, Card, ColumnView};
pub use reconcile::{apply_drag, move_book, reconcile, DragEvent, MoveOutcome};
pub use store::BookStore;
