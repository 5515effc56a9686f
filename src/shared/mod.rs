//! Shared Module
//!
//! Types shared between the backend and the native client. Everything here
//! is platform-agnostic and serializable; both sides of the `/todos` API
//! agree on these definitions.

/// Todo item and client filter
pub mod item;

/// Shared error types
pub mod error;

/// Client connection configuration
pub mod config;

pub use item::{Filter, Item};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DEFAULT_USER_ID, USER_ID_HEADER};
