//! Error mapping and cross-cutting routes

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use todolist::backend::{create_router, AppState};

use crate::common::{create_test_server, FailingStore};

fn failing_server() -> TestServer {
    TestServer::new(create_router(AppState::new(Arc::new(FailingStore)), &[])).unwrap()
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = failing_server();

    let response = server.get("/todos").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_store_failure_on_every_verb() {
    let server = failing_server();

    assert_eq!(server.get("/todos/1").await.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        server.post("/todos").json(&json!({ "title": "a" })).await.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        server
            .put("/todos/1")
            .json(&json!({ "id": "1", "title": "a" }))
            .await
            .status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(server.delete("/todos/1").await.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_precedes_store_access() {
    let server = failing_server();

    let response = server.post("/todos").json(&json!({ "title": " " })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = create_test_server().await;

    let response = server
        .post("/todos")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let server = create_test_server().await;

    let response = server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let server = create_test_server().await;

    let response = server
        .get("/todos")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5173"))
        .await;

    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        HeaderValue::from_static("*")
    );
}
