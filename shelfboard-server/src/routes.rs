//! API routes

use crate::config::{CorsOrigins, ServerConfig};
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            AllowOrigin::list(list.iter().filter_map(|s| s.parse::<HeaderValue>().ok()))
        }
        CorsOrigins::Localhost => {
            AllowOrigin::list(LOCAL_ORIGINS.into_iter().map(HeaderValue::from_static))
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        // Board views
        .route("/board", get(handlers::get_board))
        .route("/columns/:status", get(handlers::get_column))
        // Book store
        .route("/books", get(handlers::list_books).post(handlers::add_book))
        .route("/books/:index", delete(handlers::delete_book))
        .route("/books/id/:id", delete(handlers::delete_book_by_id))
        .route("/books/id/:id/move", post(handlers::move_book))
        // Drag-and-drop events
        .route("/drag", post(handlers::drag_book))
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check));

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(state)
}
