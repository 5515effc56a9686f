//! `/todos` CRUD integration tests

use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use todolist::shared::Item;

use crate::common::{create_test_server, titles};

const USER_ID: HeaderName = HeaderName::from_static("x-user-id");

#[tokio::test]
async fn test_list_empty() {
    let server = create_test_server().await;

    let response = server.get("/todos").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let items: Vec<Item> = response.json();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_create_assigns_id_and_location() {
    let server = create_test_server().await;

    let response = server
        .post("/todos")
        .json(&json!({ "title": "  buy milk  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Item = response.json();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "buy milk");
    assert_eq!(created.user_id.as_deref(), Some("demo"));
    assert!(!created.is_completed);
    assert!(created.created_at > 0);

    let location = response.header("location");
    assert_eq!(location.to_str().unwrap(), format!("/todos/{}", created.id));
}

#[tokio::test]
async fn test_create_keeps_client_timestamp_and_id() {
    let server = create_test_server().await;

    let response = server
        .post("/todos")
        .json(&json!({ "id": "fixed", "title": "a", "createdAt": 42, "isCompleted": true }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Item = response.json();
    assert_eq!(created.id, "fixed");
    assert_eq!(created.created_at, 42);
    assert!(created.is_completed);
}

#[tokio::test]
async fn test_create_ignores_body_owner() {
    let server = create_test_server().await;

    let response = server
        .post("/todos")
        .add_header(USER_ID, HeaderValue::from_static("alice"))
        .json(&json!({ "title": "mine", "userId": "mallory" }))
        .await;

    let created: Item = response.json();
    assert_eq!(created.user_id.as_deref(), Some("alice"));

    let mallory: Vec<Item> = server
        .get("/todos")
        .add_header(USER_ID, HeaderValue::from_static("mallory"))
        .await
        .json();
    assert!(mallory.is_empty());
}

#[tokio::test]
async fn test_create_blank_title_is_rejected() {
    let server = create_test_server().await;

    let response = server.post("/todos").json(&json!({ "title": "   " })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Title cannot be empty"));

    let items: Vec<Item> = server.get("/todos").await.json();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_id_conflicts() {
    let server = create_test_server().await;
    let body = json!({ "id": "dup", "title": "a" });

    server.post("/todos").json(&body).await.assert_status(StatusCode::CREATED);
    let response = server.post("/todos").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_round_trip() {
    let server = create_test_server().await;

    let created: Item = server
        .post("/todos")
        .json(&json!({ "title": "write tests" }))
        .await
        .json();

    let fetched: Item = server.get(&format!("/todos/{}", created.id)).await.json();
    assert_eq!(fetched, created);

    let listed: Vec<Item> = server.get("/todos").await.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let server = create_test_server().await;

    for (title, created_at) in [("old", 1), ("newest", 3), ("middle", 2)] {
        server
            .post("/todos")
            .json(&json!({ "title": title, "createdAt": created_at }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let items: Vec<Item> = server.get("/todos").await.json();
    assert_eq!(titles(&items), vec!["newest", "middle", "old"]);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let server = create_test_server().await;

    let response = server.get("/todos/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_update_replaces_document() {
    let server = create_test_server().await;
    let created: Item = server.post("/todos").json(&json!({ "title": "a" })).await.json();

    let response = server
        .put(&format!("/todos/{}", created.id))
        .json(&json!({
            "id": created.id,
            "title": " b ",
            "isCompleted": true,
            "createdAt": 1,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let fetched: Item = server.get(&format!("/todos/{}", created.id)).await.json();
    assert_eq!(fetched.title, "b");
    assert!(fetched.is_completed);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_id_mismatch_changes_nothing() {
    let server = create_test_server().await;
    let created: Item = server.post("/todos").json(&json!({ "title": "a" })).await.json();

    let response = server
        .put(&format!("/todos/{}", created.id))
        .json(&json!({ "id": "other", "title": "b" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Todo ID mismatch"));

    let fetched: Item = server.get(&format!("/todos/{}", created.id)).await.json();
    assert_eq!(fetched.title, "a");
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let server = create_test_server().await;

    let response = server
        .put("/todos/ghost")
        .json(&json!({ "id": "ghost", "title": "b" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_blank_title_is_rejected() {
    let server = create_test_server().await;
    let created: Item = server.post("/todos").json(&json!({ "title": "a" })).await.json();

    let response = server
        .put(&format!("/todos/{}", created.id))
        .json(&json!({ "id": created.id, "title": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice() {
    let server = create_test_server().await;
    let created: Item = server.post("/todos").json(&json!({ "title": "a" })).await.json();
    let path = format!("/todos/{}", created.id);

    assert_eq!(server.delete(&path).await.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(server.delete(&path).await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(server.get(&path).await.status_code(), StatusCode::NOT_FOUND);
}
