//! Integration tests for the Shelfboard Server API

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use shelfboard_server::config::ServerConfig;
use shelfboard_server::routes::create_router;
use shelfboard_server::state::{AppState, ServerEvent};
use tempfile::TempDir;

/// Create a test server with an empty board
fn create_test_server() -> (TestServer, AppState) {
    let config = ServerConfig::default();
    let state = AppState::new(&config);
    let app = create_router(state.clone(), &config);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

async fn add(server: &TestServer, title: &str, author: &str, status: &str) -> Value {
    let response = server
        .post("/api/v1/books")
        .json(&json!({ "title": title, "author": author, "status": status }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn column_titles(board: &Value, column: usize) -> Vec<String> {
    board["columns"][column]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (server, _state) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_board_empty() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/board").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["revision"], 0);
    assert_eq!(body["books"].as_array().unwrap().len(), 0);
    assert_eq!(body["columns"].as_array().unwrap().len(), 3);
    assert_eq!(body["columns"][0]["status"], "To Read");
}

#[tokio::test]
async fn test_add_book_appends() {
    let (server, _state) = create_test_server();

    add(&server, "T1", "A1", "To Read").await;
    let body = add(&server, "T2", "A2", "Reading").await;

    assert_eq!(body["revision"], 2);
    assert_eq!(body["outcome"]["kind"], "added");
    assert_eq!(body["outcome"]["book"]["title"], "T2");

    let books: Value = server.get("/api/v1/books").await.json();
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[1]["title"], "T2");
    assert_eq!(books[1]["status"], "Reading");
}

#[tokio::test]
async fn test_add_book_default_status() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/api/v1/books")
        .json(&json!({ "title": "Dune", "author": "Frank Herbert" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["outcome"]["book"]["status"], "To Read");
}

#[tokio::test]
async fn test_add_book_empty_author_rejected() {
    let (server, _state) = create_test_server();

    add(&server, "T1", "A1", "To Read").await;
    add(&server, "T2", "A2", "Reading").await;

    let response = server
        .post("/api/v1/books")
        .json(&json!({ "title": "T3", "author": "" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let books: Value = server.get("/api/v1/books").await.json();
    assert_eq!(books.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_column() {
    let (server, _state) = create_test_server();

    add(&server, "A", "a", "To Read").await;
    add(&server, "B", "b", "Completed").await;
    add(&server, "C", "c", "To Read").await;

    let response = server.get("/api/v1/columns/to_read").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "To Read");
    let titles: Vec<_> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "C"]);
}

#[tokio::test]
async fn test_get_column_unknown_status() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/columns/shelved").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_by_index() {
    let (server, _state) = create_test_server();

    add(&server, "T1", "A1", "To Read").await;
    add(&server, "T2", "A2", "Reading").await;
    add(&server, "T3", "A3", "Completed").await;

    let response = server.delete("/api/v1/books/1").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let books: Value = server.get("/api/v1/books").await.json();
    let titles: Vec<_> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["T1", "T3"]);
}

#[tokio::test]
async fn test_delete_out_of_range() {
    let (server, _state) = create_test_server();

    let response = server.delete("/api/v1/books/0").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_by_id() {
    let (server, _state) = create_test_server();

    let body = add(&server, "T1", "A1", "To Read").await;
    let id = body["outcome"]["book"]["id"].as_str().unwrap().to_string();

    server
        .delete(&format!("/api/v1/books/id/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/v1/books/id/{}", id))
        .await
        .assert_status_not_found();
    server
        .delete("/api/v1/books/id/not-a-uuid")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_drag_across_columns() {
    let (server, _state) = create_test_server();

    add(&server, "A", "a", "To Read").await;
    add(&server, "B", "b", "To Read").await;
    add(&server, "C", "c", "Reading").await;

    let response = server
        .post("/api/v1/drag")
        .json(&json!({
            "kind": "across",
            "from": "To Read",
            "to": "Reading",
            "old_index": 0,
            "new_index": 0
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["outcome"]["kind"], "moved");
    assert_eq!(body["outcome"]["to"], "Reading");
    assert_eq!(column_titles(&body["board"], 0), ["B"]);
    assert_eq!(column_titles(&body["board"], 1), ["A", "C"]);
}

#[tokio::test]
async fn test_drag_within_column() {
    let (server, _state) = create_test_server();

    add(&server, "A", "a", "To Read").await;
    add(&server, "X", "x", "Reading").await;
    add(&server, "B", "b", "To Read").await;

    let response = server
        .post("/api/v1/drag")
        .json(&json!({
            "kind": "within",
            "status": "To Read",
            "old_index": 1,
            "new_index": 0
        }))
        .await;
    response.assert_status_ok();

    let board: Value = server.get("/api/v1/board").await.json();
    assert_eq!(column_titles(&board, 0), ["B", "A"]);
    assert_eq!(column_titles(&board, 1), ["X"]);
}

#[tokio::test]
async fn test_drag_unknown_position_rejected() {
    let (server, _state) = create_test_server();

    add(&server, "A", "a", "To Read").await;

    let response = server
        .post("/api/v1/drag")
        .json(&json!({
            "kind": "across",
            "from": "Reading",
            "to": "To Read",
            "old_index": 0,
            "new_index": 0
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let board: Value = server.get("/api/v1/board").await.json();
    assert_eq!(board["revision"], 1);
    assert_eq!(column_titles(&board, 0), ["A"]);
}

#[tokio::test]
async fn test_move_by_id() {
    let (server, _state) = create_test_server();

    let a = add(&server, "A", "a", "To Read").await;
    let c = add(&server, "C", "c", "Completed").await;
    let a_id = a["outcome"]["book"]["id"].as_str().unwrap().to_string();
    let c_id = c["outcome"]["book"]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/v1/books/id/{}/move", a_id))
        .json(&json!({ "to": "Completed", "before": c_id }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(column_titles(&body["board"], 2), ["A", "C"]);
    assert!(column_titles(&body["board"], 0).is_empty());
}

#[tokio::test]
async fn test_mutations_broadcast_events() {
    let (server, state) = create_test_server();
    let mut rx = state.subscribe();

    add(&server, "A", "a", "To Read").await;
    server
        .post("/api/v1/drag")
        .json(&json!({
            "kind": "across",
            "from": "To Read",
            "to": "Completed",
            "old_index": 0,
            "new_index": 0
        }))
        .await
        .assert_status_ok();

    match rx.try_recv().unwrap() {
        ServerEvent::BookAdded {
            revision, title, ..
        } => {
            assert_eq!(revision, 1);
            assert_eq!(title, "A");
        }
        other => panic!("unexpected event: {:?}", other),
    }
    match rx.try_recv().unwrap() {
        ServerEvent::BookMoved { revision, to, .. } => {
            assert_eq!(revision, 2);
            assert_eq!(to, shelfboard_core::Status::Completed);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_static_dir_served() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("index.html"), "<h1>Shelfboard</h1>").unwrap();

    let config = ServerConfig {
        static_dir: Some(temp_dir.path().to_path_buf()),
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(&config), &config);
    let server = TestServer::new(app).expect("Failed to create test server");

    let response = server.get("/index.html").await;
    response.assert_status_ok();
    assert!(response.text().contains("Shelfboard"));

    // API routes still win over the fallback
    server.get("/api/v1/board").await.assert_status_ok();
}
