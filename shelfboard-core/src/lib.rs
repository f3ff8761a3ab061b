//! Shelfboard Core Library
//!
//! Types and board logic for a three-column reading tracker. Books live in a
//! single ordered store; the "To Read", "Reading" and "Completed" columns are
//! projections of it. Drag-and-drop events arrive in column positions and are
//! reconciled back into a new store ordering.

pub mod board;
pub mod error;
pub mod form;
pub mod session;
pub mod types;

pub use board::{BoardView, BookStore, DragEvent, MoveOutcome};
pub use error::{FormError, MoveError, ShelfError, StoreError, Result};
pub use form::{BookForm, FormField};
pub use session::{Action, ActionOutcome, BoardSession, BoardSnapshot};
pub use types::{BookId, BookRecord, Status};
