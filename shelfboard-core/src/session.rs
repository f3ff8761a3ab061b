//! Page session controller
//!
//! A `BoardSession` owns the authoritative store for the lifetime of one
//! session. Outer layers share it behind a lock and every event handler
//! reads the current store through it, so no handler ever works from a
//! stale copy.

use crate::board::{apply_drag, move_book, BoardView, BookStore, DragEvent, MoveOutcome};
use crate::error::{Result, ShelfError, StoreError};
use crate::form::BookForm;
use crate::types::{BookId, BookRecord, Status};
use serde::{Deserialize, Serialize};

/// A user action against the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Submit the add-book form with these values
    Submit {
        title: String,
        author: String,
        #[serde(default)]
        status: Status,
    },

    /// Delete by store position
    Delete { index: usize },

    /// Delete by identity
    DeleteBook { id: BookId },

    /// Drag-and-drop event from the board
    Drag { event: DragEvent },

    /// Move by identity
    Move {
        id: BookId,
        to: Status,
        #[serde(default)]
        before: Option<BookId>,
    },
}

impl Action {
    /// Parse a JSON array of actions
    pub fn parse_script(json: &str) -> Result<Vec<Action>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What an accepted action changed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Added { book: BookRecord },
    Deleted { book: BookRecord, index: usize },
    Moved(MoveOutcome),
}

/// Serialisable view of the whole board at one revision
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot<'a> {
    pub revision: u64,
    pub books: &'a BookStore,
    #[serde(flatten)]
    pub board: BoardView<'a>,
}

/// The board state of one session
#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    store: BookStore,
    form: BookForm,
    revision: u64,
}

impl BoardSession {
    /// Start a session with an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over existing books
    pub fn with_store(store: BookStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    /// Form input, for change events
    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    /// Bumped on every accepted mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView::project(&self.store)
    }

    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            revision: self.revision,
            books: &self.store,
            board: self.view(),
        }
    }

    /// Submit the session's own form
    pub fn submit_form(&mut self) -> Result<BookRecord> {
        let id = self.form.submit(&mut self.store)?;
        self.revision += 1;
        self.added(id)
    }

    /// Apply one action. A rejected action leaves the session unchanged.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome> {
        let outcome = match action {
            Action::Submit {
                title,
                author,
                status,
            } => {
                let mut form = BookForm::filled(title, author, status);
                let id = form.submit(&mut self.store)?;
                ActionOutcome::Added {
                    book: self.added(id)?,
                }
            }
            Action::Delete { index } => {
                let book = self.store.remove_at(index)?;
                tracing::debug!(index, id = %book.id, "Book deleted");
                ActionOutcome::Deleted { book, index }
            }
            Action::DeleteBook { id } => {
                let index = self
                    .store
                    .position(id)
                    .ok_or(StoreError::UnknownBook(id))?;
                let book = self.store.remove_at(index)?;
                tracing::debug!(index, %id, "Book deleted");
                ActionOutcome::Deleted { book, index }
            }
            Action::Drag { event } => ActionOutcome::Moved(apply_drag(&mut self.store, event)?),
            Action::Move { id, to, before } => {
                ActionOutcome::Moved(move_book(&mut self.store, id, to, before)?)
            }
        };

        self.revision += 1;
        Ok(outcome)
    }

    /// Apply actions in order, collecting the ones that were rejected.
    ///
    /// Rejections do not stop the run, matching how the board keeps taking
    /// events after one is ignored.
    pub fn replay<I>(&mut self, actions: I) -> Vec<(usize, ShelfError)>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .enumerate()
            .filter_map(|(i, action)| self.apply(action).err().map(|e| (i, e)))
            .collect()
    }

    fn added(&self, id: BookId) -> Result<BookRecord> {
        self.store
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownBook(id).into())
    }
}
