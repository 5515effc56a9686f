/**
 * API Route Handlers
 *
 * Route table for the todo REST surface.
 *
 * # Routes
 *
 * - `GET /todos` - list the caller's items, newest first
 * - `POST /todos` - create an item
 * - `GET /todos/{id}` - fetch one item
 * - `PUT /todos/{id}` - replace an item
 * - `DELETE /todos/{id}` - delete an item
 * - `GET /health` - liveness probe
 */

use axum::{routing::get, Json, Router};

use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
