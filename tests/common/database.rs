//! Item store fixtures

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;
use todolist::backend::{create_router, AppState, ItemStore, SqliteItemStore, StoreError};
use todolist::shared::Item;

/// A file-backed SQLite store in a temporary directory
pub struct TestDatabase {
    dir: TempDir,
    store: SqliteItemStore,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SqliteItemStore::connect(&Self::url_in(&dir))
            .await
            .expect("Failed to open test database");
        Self { dir, store }
    }

    fn url_in(dir: &TempDir) -> String {
        format!("sqlite://{}", dir.path().join("items.db").display())
    }

    pub fn url(&self) -> String {
        Self::url_in(&self.dir)
    }

    pub fn store(&self) -> SqliteItemStore {
        self.store.clone()
    }
}

/// A fresh in-memory store
pub async fn memory_store() -> SqliteItemStore {
    SqliteItemStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

/// Test server over a fresh in-memory store
pub async fn create_test_server() -> TestServer {
    let store = memory_store().await;
    TestServer::new(create_router(AppState::new(Arc::new(store)), &[])).unwrap()
}

/// Store whose every operation fails like a lost connection
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolClosed)
}

#[async_trait]
impl ItemStore for FailingStore {
    async fn query_partition(&self, _user_id: &str) -> Result<Vec<Item>, StoreError> {
        Err(unavailable())
    }

    async fn read_item(&self, _id: &str, _user_id: &str) -> Result<Option<Item>, StoreError> {
        Err(unavailable())
    }

    async fn create_item(&self, _item: &Item) -> Result<Item, StoreError> {
        Err(unavailable())
    }

    async fn upsert_item(&self, _item: &Item) -> Result<Item, StoreError> {
        Err(unavailable())
    }

    async fn delete_item(&self, _id: &str, _user_id: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }
}
