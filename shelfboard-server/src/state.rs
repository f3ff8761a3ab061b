//! Application state

use crate::config::ServerConfig;
use shelfboard_core::{ActionOutcome, BoardSession, BookId, Status};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The board session every handler reads and mutates
    pub board: Arc<RwLock<BoardSession>>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// Server-sent events
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// A book was added through the form
    BookAdded {
        revision: u64,
        id: BookId,
        title: String,
    },

    /// A book was deleted
    BookDeleted {
        revision: u64,
        id: BookId,
        index: usize,
    },

    /// A book was dragged or moved
    BookMoved {
        revision: u64,
        id: BookId,
        from: Status,
        to: Status,
    },
}

impl ServerEvent {
    /// Event announcing an accepted action at the given revision
    pub fn from_outcome(revision: u64, outcome: &ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Added { book } => ServerEvent::BookAdded {
                revision,
                id: book.id,
                title: book.title.clone(),
            },
            ActionOutcome::Deleted { book, index } => ServerEvent::BookDeleted {
                revision,
                id: book.id,
                index: *index,
            },
            ActionOutcome::Moved(moved) => ServerEvent::BookMoved {
                revision,
                id: moved.id,
                from: moved.from,
                to: moved.to,
            },
        }
    }
}

impl AppState {
    /// Create new application state with an empty board
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_session(BoardSession::new(), config.event_capacity)
    }

    /// Create application state around an existing session
    pub fn with_session(session: BoardSession, event_capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(event_capacity);
        Self {
            board: Arc::new(RwLock::new(session)),
            event_tx,
        }
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
