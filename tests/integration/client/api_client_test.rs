//! `TodoApiClient` against a wiremock server

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use todolist::egui_app::{ApiError, ApiRequest, ApiResponse};
use todolist::shared::Item;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, item_json, titles};

#[tokio::test]
async fn test_list_sends_identity_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(header("x-user-id", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            item_json("2", "second", true),
            item_json("1", "first", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server, "alice").list().await.unwrap();

    assert_eq!(titles(&items), vec!["second", "first"]);
    assert!(items[0].is_completed);
}

#[tokio::test]
async fn test_get_returns_none_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Todo not found", "status": 404 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json("1", "first", false)))
        .mount(&server)
        .await;

    let client = client_for(&server, "alice");

    assert_eq!(client.get("missing").await, Ok(None));
    let found = client.get("1").await.unwrap().unwrap();
    assert_eq!(found.title, "first");
}

#[tokio::test]
async fn test_create_posts_body_and_returns_stored_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_partial_json(json!({ "title": "milk", "isCompleted": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(item_json("42", "milk", false)))
        .expect(1)
        .mount(&server)
        .await;

    let draft = Item::new("milk").unwrap();
    let created = client_for(&server, "alice").create(&draft).await.unwrap();

    assert_eq!(created.id, "42");
    assert_eq!(created.user_id.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_update_and_delete_accept_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "alice");
    let item: Item = serde_json::from_value(item_json("1", "first", true)).unwrap();

    assert_eq!(client.execute(ApiRequest::Update(item)).await, Ok(ApiResponse::Updated));
    assert_eq!(
        client.execute(ApiRequest::Delete { id: "1".to_string() }).await,
        Ok(ApiResponse::Deleted)
    );
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Validation error in field 'title': Title cannot be empty",
            "status": 400,
        })))
        .mount(&server)
        .await;

    let err = client_for(&server, "alice")
        .create(&Item::default())
        .await
        .unwrap_err();

    assert_matches!(err, ApiError::Status { status: 400, message } if message.contains("Title cannot be empty"));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server, "alice").delete("1").await.unwrap_err();

    assert_eq!(err, ApiError::Status { status: 500, message: "boom".to_string() });
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server, "alice").delete("1").await.unwrap_err();

    assert_eq!(err, ApiError::NotFound);
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server, "alice").list().await.unwrap_err();

    assert_matches!(err, ApiError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server, "alice");
    drop(server);

    let err = client.list().await.unwrap_err();

    assert_matches!(err, ApiError::Network(_));
}
