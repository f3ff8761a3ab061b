//! Drag event reconciliation
//!
//! The drag collaborator reports two kinds of event: a reorder inside one
//! column, and a drop into a different column. Both carry column-local
//! positions. Reconciling an event means translating those positions into
//! store positions and producing the new store ordering.

use super::index::{global_index, insertion_point};
use super::projection::column_len;
use super::BookStore;
use crate::error::MoveError;
use crate::types::{BookId, Status};
use serde::{Deserialize, Serialize};

/// A drag-and-drop event, in column-local positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragEvent {
    /// Reorder within one column
    Within {
        status: Status,
        old_index: usize,
        new_index: usize,
    },

    /// Drop into another column
    Across {
        from: Status,
        to: Status,
        old_index: usize,
        new_index: usize,
    },
}

impl DragEvent {
    /// Classify a raw event from its source and destination containers
    pub fn from_containers(from: Status, to: Status, old_index: usize, new_index: usize) -> Self {
        if from == to {
            DragEvent::Within {
                status: from,
                old_index,
                new_index,
            }
        } else {
            DragEvent::Across {
                from,
                to,
                old_index,
                new_index,
            }
        }
    }

    pub fn source(&self) -> Status {
        match *self {
            DragEvent::Within { status, .. } => status,
            DragEvent::Across { from, .. } => from,
        }
    }

    pub fn destination(&self) -> Status {
        match *self {
            DragEvent::Within { status, .. } => status,
            DragEvent::Across { to, .. } => to,
        }
    }
}

/// What a successful move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub id: BookId,
    pub from: Status,
    pub to: Status,
    /// Store index before the move
    pub global_from: usize,
    /// Store index after the move
    pub global_to: usize,
}

/// Compute the store ordering that results from a drag event.
///
/// The input store is left untouched. Events whose positions do not map to a
/// book are rejected rather than guessed at.
pub fn reconcile(store: &BookStore, event: DragEvent) -> Result<BookStore, MoveError> {
    plan(store, event).map(|(next, _)| next)
}

/// Apply a drag event to the store in place
pub fn apply_drag(store: &mut BookStore, event: DragEvent) -> Result<MoveOutcome, MoveError> {
    let (next, outcome) = plan(store, event)?;
    *store = next;

    tracing::debug!(
        id = %outcome.id,
        from = %outcome.from,
        to = %outcome.to,
        global_from = outcome.global_from,
        global_to = outcome.global_to,
        "Applied drag"
    );
    Ok(outcome)
}

fn plan(store: &BookStore, event: DragEvent) -> Result<(BookStore, MoveOutcome), MoveError> {
    let result = match event {
        DragEvent::Within {
            status,
            old_index,
            new_index,
        } => within(store, status, old_index, new_index),
        DragEvent::Across {
            from,
            to,
            old_index,
            new_index,
        } => across(store, from, to, old_index, new_index),
    };

    result.map_err(|e| {
        tracing::warn!(?event, error = %e, "Rejecting drag event");
        e
    })
}

fn within(
    store: &BookStore,
    status: Status,
    old_index: usize,
    new_index: usize,
) -> Result<(BookStore, MoveOutcome), MoveError> {
    // Both positions resolve against the store as it was before the move
    let source = global_index(store, status, old_index).ok_or(MoveError::UnknownSource {
        status,
        index: old_index,
    })?;
    let target = global_index(store, status, new_index).ok_or(MoveError::UnknownTarget {
        status,
        index: new_index,
    })?;

    let mut books = store.records().to_vec();
    let book = books.remove(source);
    let id = book.id;
    books.insert(target, book);

    Ok((
        BookStore::from_records(books),
        MoveOutcome {
            id,
            from: status,
            to: status,
            global_from: source,
            global_to: target,
        },
    ))
}

fn across(
    store: &BookStore,
    from: Status,
    to: Status,
    old_index: usize,
    new_index: usize,
) -> Result<(BookStore, MoveOutcome), MoveError> {
    if from == to {
        return Err(MoveError::SameColumn(from));
    }

    let source = global_index(store, from, old_index).ok_or(MoveError::UnknownSource {
        status: from,
        index: old_index,
    })?;
    let destination_empty = column_len(store, to) == 0;

    let mut books = store.records().to_vec();
    let book = books.remove(source).with_status(to);
    let id = book.id;

    // An empty destination column always appends to the end of the store
    let insert_at = if destination_empty {
        books.len()
    } else {
        insertion_point(&books, to, new_index)
    };
    books.insert(insert_at, book);

    Ok((
        BookStore::from_records(books),
        MoveOutcome {
            id,
            from,
            to,
            global_from: source,
            global_to: insert_at,
        },
    ))
}

/// Move a book by identity.
///
/// The book takes status `to` and is placed directly before `before`, or at
/// the end of the store when `before` is `None`.
pub fn move_book(
    store: &mut BookStore,
    id: BookId,
    to: Status,
    before: Option<BookId>,
) -> Result<MoveOutcome, MoveError> {
    let source = store.position(id).ok_or(MoveError::UnknownBook(id))?;
    if let Some(anchor) = before {
        if store.position(anchor).is_none() {
            return Err(MoveError::UnknownBook(anchor));
        }
    }

    let mut books = store.records().to_vec();
    let book = books.remove(source);
    let from = book.status;

    let insert_at = match before {
        Some(anchor) if anchor == id => source,
        Some(anchor) => books
            .iter()
            .position(|b| b.id == anchor)
            .ok_or(MoveError::UnknownBook(anchor))?,
        None => books.len(),
    };
    books.insert(insert_at, book.with_status(to));
    *store = BookStore::from_records(books);

    tracing::debug!(%id, %from, %to, global_to = insert_at, "Moved book");
    Ok(MoveOutcome {
        id,
        from,
        to,
        global_from: source,
        global_to: insert_at,
    })
}
