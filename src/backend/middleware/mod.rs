//! Middleware Module
//!
//! Request processing that runs before the todo handlers.
//!
//! # Components
//!
//! - **`identity`** - `CurrentUser` extractor resolving the owner id from the
//!   `X-User-Id` header, the `userId` query parameter, or the default
//! - **`cors`** - CORS layer built from the configured allowed origins

/// Request identity resolution
pub mod identity;

/// CORS configuration
pub mod cors;

pub use identity::{resolve_user_id, CurrentUser, USER_ID_HEADER};
pub use cors::cors_layer;
