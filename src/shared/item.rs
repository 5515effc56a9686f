//! Todo Item
//!
//! The `Item` type travels unchanged between the client state store, the
//! HTTP API and the item store. Wire names are camelCase:
//!
//! ```json
//! { "id": "…", "userId": "demo", "title": "buy milk", "isCompleted": false, "createdAt": 1718000000000 }
//! ```
//!
//! Every field is optional on input so that a sparse body still parses;
//! validation (`Item::validate_title`) then decides what is acceptable.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A single todo entry owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Unique within the owner's partition. Empty until the server assigns one.
    pub id: String,
    /// Owning user. Always overwritten by the server from the request identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    pub is_completed: bool,
    /// Creation instant in milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Item {
    /// Build an unsaved item with a validated title, stamped with the current time.
    pub fn new(title: &str) -> Result<Self, SharedError> {
        Ok(Self {
            id: String::new(),
            user_id: None,
            title: Self::validate_title(title)?,
            is_completed: false,
            created_at: now_millis(),
        })
    }

    /// Trim a title and reject it when nothing is left.
    pub fn validate_title(title: &str) -> Result<String, SharedError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(SharedError::validation("title", "Title cannot be empty"));
        }
        Ok(trimmed.to_string())
    }

    /// Copy of this item with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }

    /// Copy of this item with a new title (not validated)
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// The owner id, or an empty string when unset
    pub fn owner(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Client-side completion filter
///
/// Equivalent to the tri-state `isCompleted ∈ {unset, true, false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// No filtering
    #[default]
    All,
    /// Only completed items
    Completed,
    /// Only items still to do
    Active,
}

impl Filter {
    /// The `isCompleted` value this filter selects, `None` for all
    pub fn is_completed(self) -> Option<bool> {
        match self {
            Filter::All => None,
            Filter::Completed => Some(true),
            Filter::Active => Some(false),
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        self.is_completed()
            .map_or(true, |wanted| item.is_completed == wanted)
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Active => "Active",
        }
    }
}
