//! Todo access layer
//!
//! Typed CRUD over an `ItemStore`, every call scoped to an explicit owner.
//! This is where ownership, id and title rules are enforced; the store
//! below only persists documents.

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::{ItemStore, StoreError};
use crate::shared::item::{now_millis, Item};

/// Owner-scoped CRUD over the item store
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn ItemStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// All items of `user_id`, newest first. Empty when there are none.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Item>, BackendError> {
        let items = self
            .store
            .query_partition(user_id)
            .await
            .map_err(|e| infrastructure("retrieving todos", user_id, e))?;

        tracing::info!("Retrieved {} todos for user {}", items.len(), user_id);
        Ok(items)
    }

    /// Point lookup; `Ok(None)` when the owner has no item with this id.
    pub async fn get_by_id(&self, id: &str, user_id: &str) -> Result<Option<Item>, BackendError> {
        let item = self
            .store
            .read_item(id, user_id)
            .await
            .map_err(|e| infrastructure("retrieving todo", user_id, e))?;

        match &item {
            Some(_) => tracing::info!("Retrieved todo {} for user {}", id, user_id),
            None => tracing::warn!("Todo {} not found for user {}", id, user_id),
        }
        Ok(item)
    }

    /// Persist a new item and return it as stored.
    ///
    /// The owner must be set. An empty id is replaced by a fresh UUID and a
    /// zero `created_at` by the current time.
    pub async fn create(&self, mut item: Item) -> Result<Item, BackendError> {
        let user_id = require_owner(&item)?;
        item.title = Item::validate_title(&item.title)?;
        if item.id.is_empty() {
            item.id = Uuid::new_v4().to_string();
        }
        if item.created_at == 0 {
            item.created_at = now_millis();
        }

        let created = self.store.create_item(&item).await.map_err(|e| match e {
            StoreError::Conflict { id } => {
                tracing::warn!("Todo {} already exists for user {}", id, user_id);
                BackendError::Conflict { id }
            }
            other => infrastructure("creating todo", &user_id, other),
        })?;

        tracing::info!("Created todo {} for user {}", created.id, user_id);
        Ok(created)
    }

    /// Replace an existing item entirely.
    ///
    /// Check-then-write: the item must exist under the owner when the call
    /// starts. The stored `created_at` always wins over the incoming one.
    pub async fn update(&self, id: &str, mut item: Item) -> Result<Item, BackendError> {
        if id != item.id {
            return Err(BackendError::id_mismatch(id, item.id));
        }
        let user_id = require_owner(&item)?;
        item.title = Item::validate_title(&item.title)?;

        let existing = self.get_by_id(id, &user_id).await?.ok_or_else(|| {
            tracing::warn!("Todo {} not found for user {} during update", id, user_id);
            BackendError::not_found(id)
        })?;
        item.created_at = existing.created_at;

        let updated = self
            .store
            .upsert_item(&item)
            .await
            .map_err(|e| infrastructure("updating todo", &user_id, e))?;

        tracing::info!("Updated todo {} for user {}", id, user_id);
        Ok(updated)
    }

    /// Remove an item; not-found when it does not exist.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<(), BackendError> {
        match self.store.delete_item(id, user_id).await {
            Ok(()) => {
                tracing::info!("Deleted todo {} for user {}", id, user_id);
                Ok(())
            }
            Err(StoreError::NotFound { .. }) => {
                tracing::warn!("Todo {} not found for user {} during delete", id, user_id);
                Err(BackendError::not_found(id))
            }
            Err(e) => Err(infrastructure("deleting todo", user_id, e)),
        }
    }
}

fn require_owner(item: &Item) -> Result<String, BackendError> {
    match item.user_id.as_deref() {
        Some(user_id) if !user_id.is_empty() => Ok(user_id.to_string()),
        _ => Err(BackendError::validation("userId", "UserId is required")),
    }
}

fn infrastructure(action: &str, user_id: &str, err: StoreError) -> BackendError {
    tracing::error!("Error {} for user {}: {}", action, user_id, err);
    BackendError::from(err)
}
