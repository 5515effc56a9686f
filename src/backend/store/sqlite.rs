//! SQLite item store
//!
//! Each item is one row of the `items` table: the partition key, the id, the
//! creation time (kept as a column for ordering) and the item itself as a
//! JSON document. The schema is created by the embedded migrations.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{ItemStore, StoreError};
use crate::shared::Item;

/// Item store backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Open the database at `database_url` and make sure the schema exists.
    ///
    /// An in-memory database lives only as long as a connection to it, so it
    /// gets exactly one connection that the pool never closes.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = Self::pool_options(database_url).connect_with(options).await?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        Ok(store)
    }

    fn pool_options(database_url: &str) -> SqlitePoolOptions {
        if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        }
    }

    /// Wrap an existing pool without touching the schema
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Item store schema is ready");
        Ok(())
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn decode(document: &str) -> Result<Item, StoreError> {
        Ok(serde_json::from_str(document)?)
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn query_partition(&self, user_id: &str) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT document
            FROM items
            WHERE user_id = ?1
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Self::decode(row.get::<&str, _>("document")))
            .collect()
    }

    async fn read_item(&self, id: &str, user_id: &str) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query("SELECT document FROM items WHERE user_id = ?1 AND id = ?2")
            .bind(user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::decode(r.get::<&str, _>("document")))
            .transpose()
    }

    async fn create_item(&self, item: &Item) -> Result<Item, StoreError> {
        let document = serde_json::to_string(item)?;

        let result = sqlx::query(
            r#"
            INSERT INTO items (user_id, id, created_at, document)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(item.owner())
        .bind(&item.id)
        .bind(item.created_at)
        .bind(document)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(item.clone()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(StoreError::Conflict {
                id: item.id.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn upsert_item(&self, item: &Item) -> Result<Item, StoreError> {
        let document = serde_json::to_string(item)?;

        sqlx::query(
            r#"
            INSERT INTO items (user_id, id, created_at, document)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (user_id, id)
            DO UPDATE SET created_at = excluded.created_at, document = excluded.document
            "#,
        )
        .bind(item.owner())
        .bind(&item.id)
        .bind(item.created_at)
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str, user_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE user_id = ?1 AND id = ?2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}
