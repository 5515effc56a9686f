/**
 * Backend Error Types
 *
 * This module defines the errors raised by the backend access layer and
 * the HTTP handlers. Each variant belongs to one category of the error
 * taxonomy and maps to a single HTTP status code.
 *
 * # Error Categories
 *
 * ## Validation
 *
 * Client-fixable input problems, never retried:
 * - Empty or whitespace-only title
 * - Missing owner id
 * - Path id and body id disagree
 * - Malformed request body
 *
 * ## Not Found / Conflict
 *
 * Domain signals about the addressed item. Probes for existence use
 * `Option` instead and never see `NotFound`.
 *
 * ## Infrastructure
 *
 * Store failures (connectivity, closed pool, undecodable documents).
 * These are logged and propagated, never swallowed.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use todolist::backend::error::BackendError;
///
/// let err = BackendError::not_found("42");
/// assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input validation failure (from the shared validation rules)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Path id and body id disagree on update
    #[error("Todo ID mismatch: path '{path_id}' does not match body '{body_id}'")]
    IdMismatch {
        /// Id taken from the URL path
        path_id: String,
        /// Id found in the request body
        body_id: String,
    },

    /// Request body could not be parsed
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Parser message
        message: String,
    },

    /// No item with this id for the requesting owner
    #[error("Todo {id} not found")]
    NotFound {
        /// Requested item id
        id: String,
    },

    /// An item with this id already exists for the owner
    #[error("Todo {id} already exists")]
    Conflict {
        /// Conflicting item id
        id: String,
    },

    /// Underlying store failure
    #[error("Store error: {0}")]
    Infrastructure(#[source] StoreError),
}

impl BackendError {
    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create an id mismatch error
    pub fn id_mismatch(path_id: impl Into<String>, body_id: impl Into<String>) -> Self {
        Self::IdMismatch {
            path_id: path_id.into(),
            body_id: body_id.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - validation, id mismatch, malformed body - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Infrastructure` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to clients
    ///
    /// Infrastructure details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Infrastructure(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::Conflict { id } => Self::Conflict { id },
            other => Self::Infrastructure(other),
        }
    }
}
