//! Item Store
//!
//! A partitioned document container for todo items. Every document lives in
//! exactly one partition, the owner's user id, and is addressed by
//! `(id, user_id)`. The store does not check ownership or validate content;
//! that happens one layer up in `TodoService`.
//!
//! # Implementations
//!
//! - **`sqlite`** - `SqliteItemStore`, JSON documents in a SQLite table via `sqlx`
//!
//! Tests substitute their own implementations to inject failures.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::Item;

/// SQLite-backed store
pub mod sqlite;

pub use sqlite::SqliteItemStore;

/// Errors raised by an item store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with this id in the partition
    #[error("item {id} not found")]
    NotFound { id: String },

    /// A document with this id already exists in the partition
    #[error("item {id} already exists")]
    Conflict { id: String },

    /// Connectivity, pool or query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema setup failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Stored document could not be encoded or decoded
    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),
}

/// Partitioned document store for todo items
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All documents of a partition, newest first
    async fn query_partition(&self, user_id: &str) -> Result<Vec<Item>, StoreError>;

    /// Point read; `None` when absent
    async fn read_item(&self, id: &str, user_id: &str) -> Result<Option<Item>, StoreError>;

    /// Insert a new document, failing with `Conflict` if the id is taken
    async fn create_item(&self, item: &Item) -> Result<Item, StoreError>;

    /// Replace the whole document, inserting it when absent
    async fn upsert_item(&self, item: &Item) -> Result<Item, StoreError>;

    /// Remove a document, failing with `NotFound` if absent
    async fn delete_item(&self, id: &str, user_id: &str) -> Result<(), StoreError>;
}
