//! Backend Module
//!
//! Server-side code: an axum HTTP server exposing the `/todos` REST API
//! over a SQLite-backed item store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, app creation
//! - **`routes`** - route table and router layers
//! - **`todos`** - access layer (`TodoService`) and HTTP handlers
//! - **`store`** - `ItemStore` trait and its SQLite implementation
//! - **`middleware`** - request identity and CORS
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Request Flow
//!
//! ```text
//! HTTP request
//!   → TraceLayer / CorsLayer
//!   → handler (CurrentUser resolves the owner id)
//!   → TodoService (ownership, id and title rules)
//!   → ItemStore (partitioned documents)
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` maps to
//! 400 / 404 / 409 / 500 with a JSON body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Todo resource
pub mod todos;

/// Item persistence
pub mod store;

/// Request middleware and extractors
pub mod middleware;

/// Backend error types
pub mod error;

pub use server::{create_app, AppState, ServerConfig};
pub use routes::create_router;
pub use todos::TodoService;
pub use store::{ItemStore, SqliteItemStore, StoreError};
pub use error::BackendError;
