//! Schema and persistence tests for the SQLite item store

use pretty_assertions::assert_eq;
use todolist::backend::{ItemStore, SqliteItemStore};

use crate::common::{stored_item, titles, TestDatabase};

#[tokio::test]
async fn test_migrations_create_items_table() {
    let db = TestDatabase::new().await;

    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('items') ORDER BY cid")
        .fetch_all(db.store().pool())
        .await
        .unwrap();

    assert_eq!(columns, vec!["user_id", "id", "created_at", "document"]);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDatabase::new().await;
    db.store().migrate().await.unwrap();

    let reopened = SqliteItemStore::connect(&db.url()).await.unwrap();
    assert!(reopened.query_partition("demo").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_items_survive_reconnect() {
    let db = TestDatabase::new().await;
    let store = db.store();
    store.create_item(&stored_item("1", "alice", "first", false, 10)).await.unwrap();
    store.create_item(&stored_item("2", "alice", "second", true, 20)).await.unwrap();
    store.pool().close().await;

    let reopened = SqliteItemStore::connect(&db.url()).await.unwrap();
    let items = reopened.query_partition("alice").await.unwrap();

    assert_eq!(titles(&items), vec!["second", "first"]);
    assert_eq!(items[0], stored_item("2", "alice", "second", true, 20));
}

#[tokio::test]
async fn test_document_column_holds_item_json() {
    let db = TestDatabase::new().await;
    let store = db.store();
    store.create_item(&stored_item("1", "alice", "milk", false, 10)).await.unwrap();

    let document: String = sqlx::query_scalar("SELECT document FROM items WHERE user_id = ? AND id = ?")
        .bind("alice")
        .bind("1")
        .fetch_one(store.pool())
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();

    assert_eq!(value["title"], "milk");
    assert_eq!(value["isCompleted"], false);
    assert_eq!(value["userId"], "alice");
}
