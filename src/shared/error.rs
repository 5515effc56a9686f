//! Shared Error Types
//!
//! Errors that can be raised on both sides of the wire. Title validation
//! runs in the client state store before anything is dispatched and again
//! in the backend access layer, and both report it as a `SharedError`.
//!
//! # Usage
//!
//! ```rust
//! use todolist::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
