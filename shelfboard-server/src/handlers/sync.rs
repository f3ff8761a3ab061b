//! Server-Sent Events handler for board updates

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Event name and JSON payload for an SSE frame
pub fn event_payload(event: &ServerEvent) -> (&'static str, String) {
    match event {
        ServerEvent::BookAdded {
            revision,
            id,
            title,
        } => (
            "book_added",
            serde_json::json!({ "revision": revision, "id": id, "title": title }).to_string(),
        ),
        ServerEvent::BookDeleted {
            revision,
            id,
            index,
        } => (
            "book_deleted",
            serde_json::json!({ "revision": revision, "id": id, "index": index }).to_string(),
        ),
        ServerEvent::BookMoved {
            revision,
            id,
            from,
            to,
        } => (
            "book_moved",
            serde_json::json!({ "revision": revision, "id": id, "from": from, "to": to })
                .to_string(),
        ),
    }
}

/// SSE endpoint for board updates
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream.filter_map(|result| match result {
        Ok(event) => {
            let (event_type, data) = event_payload(&event);
            Some(Ok(Event::default().event(event_type).data(data)))
        }
        Err(e) => {
            // Lagged; clients refetch the board on the next event
            tracing::debug!(error = %e, "SSE subscriber lagged");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
