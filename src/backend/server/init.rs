/**
 * Server Initialization
 *
 * Builds the axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the item store and run its migrations
 * 2. Wrap it in the todo service inside `AppState`
 * 3. Create the router with CORS and request tracing
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Create and configure the axum application
///
/// # Errors
///
/// Fails when the item store cannot be opened or migrated; there is no
/// degraded mode without a store.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing todo backend server");

    let store = load_store(config).await?;
    let app_state = AppState::new(Arc::new(store));

    let app = create_router(app_state, &config.cors_allowed_origins);
    tracing::info!("Router configured");

    Ok(app)
}
