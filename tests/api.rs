//! API integration tests
//!
//! Drives the full axum router in-process, one isolated store per test.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use lending_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

/// Build an application with a fresh, empty store
fn app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new())),
    };
    api::create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response body")
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_borrow_flow_end_to_end() {
    let app = app();

    // Create book
    let (status, book) = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "Dune", "author": "Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"], "Herbert");
    assert_eq!(book["borrowedBy"], Value::Null);

    // Register user
    let (status, user) = send(&app, "POST", "/users", Some(json!({"name": "Alice"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Alice");

    // Borrow
    let (status, body) = send(
        &app,
        "POST",
        "/borrow",
        Some(json!({"userId": 1, "bookId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book borrowed successfully");

    // The user's borrowed list contains the book
    let (status, borrowed) = send(&app, "GET", "/users/1/borrowed", None).await;
    assert_eq!(status, StatusCode::OK);
    let borrowed = borrowed.as_array().expect("Expected an array");
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0]["id"], 1);
    assert_eq!(borrowed[0]["title"], "Dune");
    assert_eq!(borrowed[0]["author"], "Herbert");
    assert_eq!(borrowed[0]["borrowedBy"], 1);

    // A second borrow of the same book is a conflict, even for the holder
    let (status, body) = send(
        &app,
        "POST",
        "/borrow",
        Some(json!({"userId": 1, "bookId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "AlreadyBorrowed");
}

#[tokio::test]
async fn test_borrow_unknown_user_leaves_book_untouched() {
    let app = app();

    send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "Dune", "author": "Herbert"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/borrow",
        Some(json!({"userId": 99, "bookId": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");

    // Book state unchanged
    let (status, book) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["borrowedBy"], Value::Null);
}

#[tokio::test]
async fn test_borrow_unknown_book() {
    let app = app();

    send(&app, "POST", "/users", Some(json!({"name": "Alice"}))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/borrow",
        Some(json!({"userId": 1, "bookId": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_create_book_validation() {
    let app = app();

    // Both fields missing, both violations reported
    let (status, body) = send(&app, "POST", "/books", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("Expected a message");
    assert!(message.contains("Title is required"));
    assert!(message.contains("Author is required"));

    // Empty strings are rejected too
    let (status, _) = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "", "author": "Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = app();

    let (status, body) = send(&app, "POST", "/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(&app, "POST", "/users", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_borrow_requires_both_ids() {
    let app = app();

    let (status, body) = send(&app, "POST", "/borrow", Some(json!({"userId": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("Expected a message");
    assert!(message.contains("bookId is required"));
}

#[tokio::test]
async fn test_list_borrowed_unknown_user() {
    let app = app();

    let (status, body) = send(&app, "GET", "/users/99/borrowed", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");
}

#[tokio::test]
async fn test_list_borrowed_empty_for_fresh_user() {
    let app = app();

    send(&app, "POST", "/users", Some(json!({"name": "Alice"}))).await;

    let (status, borrowed) = send(&app, "GET", "/users/1/borrowed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(borrowed, json!([]));
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = app();

    let (status, body) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_book_ids_increase_across_creations() {
    let app = app();

    let (_, first) = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "Dune", "author": "Herbert"})),
    )
    .await;
    let (_, second) = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "Hyperion", "author": "Simmons"})),
    )
    .await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}
