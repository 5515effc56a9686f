//! Todos Module
//!
//! The todo resource: the owner-scoped access layer and the HTTP handlers
//! that expose it under `/todos`.
//!
//! - **`service`** - `TodoService`, CRUD over the item store
//! - **`handlers`** - axum handlers for the REST surface

/// Backend access layer
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use service::TodoService;
pub use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};
