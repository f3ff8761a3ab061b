//! Board and book store handlers

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shelfboard_core::board::column;
use shelfboard_core::{
    Action, ActionOutcome, BookId, BookRecord, DragEvent, MoveError, ShelfError, Status,
};

type ApiError = (StatusCode, String);

/// Map a rejected action to an HTTP status
fn rejection(err: ShelfError) -> ApiError {
    let status = match &err {
        ShelfError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ShelfError::Store(_) | ShelfError::Move(MoveError::UnknownBook(_)) => {
            StatusCode::NOT_FOUND
        }
        ShelfError::Move(_) => StatusCode::CONFLICT,
        ShelfError::Script(_) => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

/// Response to an accepted mutation
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub revision: u64,
    pub outcome: ActionOutcome,
    /// Board snapshot taken under the same lock as the mutation
    pub board: serde_json::Value,
}

/// Apply an action to the shared session and announce it
async fn apply(state: &AppState, action: Action) -> Result<ActionResponse, ApiError> {
    let response = {
        let mut session = state.board.write().await;
        let outcome = session.apply(action).map_err(rejection)?;
        let board = serde_json::to_value(session.snapshot())
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        ActionResponse {
            revision: session.revision(),
            outcome,
            board,
        }
    };

    state.broadcast(ServerEvent::from_outcome(
        response.revision,
        &response.outcome,
    ));
    Ok(response)
}

/// Full board: revision, flat store and the three columns
pub async fn get_board(State(state): State<AppState>) -> Response {
    let session = state.board.read().await;
    Json(session.snapshot()).into_response()
}

/// A single column
#[derive(Debug, Serialize)]
pub struct ColumnResponse {
    pub status: Status,
    pub books: Vec<BookRecord>,
}

/// Get one column of the board
pub async fn get_column(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ColumnResponse>, ApiError> {
    let status: Status = status
        .parse()
        .map_err(|e: shelfboard_core::error::ParseStatusError| {
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    let session = state.board.read().await;
    let books = column(session.store(), status)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ColumnResponse { status, books }))
}

/// List every book in store order
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<BookRecord>> {
    let session = state.board.read().await;
    Json(session.store().records().to_vec())
}

/// Add-book form submission
#[derive(Debug, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// Defaults to "To Read"
    #[serde(default)]
    pub status: Status,
}

/// Submit the add-book form
pub async fn add_book(
    State(state): State<AppState>,
    Json(form): Json<NewBook>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    let response = apply(
        &state,
        Action::Submit {
            title: form.title,
            author: form.author,
            status: form.status,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Delete the book at a store position
pub async fn delete_book(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    apply(&state, Action::Delete { index }).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(id: &str) -> Result<BookId, ApiError> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid book id: {}", id)))
}

/// Delete a book by id
pub async fn delete_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    apply(&state, Action::DeleteBook { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle a drag-and-drop event from the board
pub async fn drag_book(
    State(state): State<AppState>,
    Json(event): Json<DragEvent>,
) -> Result<Json<ActionResponse>, ApiError> {
    apply(&state, Action::Drag { event }).await.map(Json)
}

/// Identity-based move request
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub to: Status,

    /// Place before this book; append to the store when absent
    #[serde(default)]
    pub before: Option<BookId>,
}

/// Move a book by id
pub async fn move_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = parse_id(&id)?;
    apply(
        &state,
        Action::Move {
            id,
            to: request.to,
            before: request.before,
        },
    )
    .await
    .map(Json)
}
