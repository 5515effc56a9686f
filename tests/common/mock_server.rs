//! Mock HTTP server helpers for client tests

use todolist::egui_app::{Config, TodoApiClient};
use todolist::shared::AppConfig;
use wiremock::MockServer;

/// Client pointed at a wiremock server, identifying as `user_id`
pub fn client_for(server: &MockServer, user_id: &str) -> TodoApiClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server.uri()).user_id(user_id))
        .expect("mock server URL is valid");
    TodoApiClient::new(config)
}

/// Wire representation of a stored item
pub fn item_json(id: &str, title: &str, is_completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "userId": "alice",
        "title": title,
        "isCompleted": is_completed,
        "createdAt": 1_700_000_000_000i64,
    })
}
