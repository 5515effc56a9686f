/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers into a single
 * axum router.
 *
 * # Layers
 *
 * Requests pass the trace layer first, then CORS, then routing. Unknown
 * paths get a JSON 404.
 */

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::cors_layer;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared state holding the todo service
/// * `cors_allowed_origins` - Allowed browser origins; empty allows any
pub fn create_router(app_state: AppState, cors_allowed_origins: &[String]) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_allowed_origins)),
        )
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "status": 404 })),
    )
}
