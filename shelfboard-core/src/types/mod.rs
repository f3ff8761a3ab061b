//! Core types for books on the board

mod book;
mod status;

pub use book::{BookId, BookRecord};
pub use status::Status;
