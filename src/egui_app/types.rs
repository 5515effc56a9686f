/**
 * Shared UI Types
 *
 * Transient view state (input buffers, edit drafts, the error banner) and
 * the actions views emit. Views never touch the store directly; they push
 * `TodoAction`s which the app applies after the frame is laid out.
 */

use std::collections::HashMap;

use crate::shared::{Filter, Item};

/// Something the user asked for during this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Submit the add form
    Add,
    SetFilter(Filter),
    Toggle(String),
    StartEdit(Item),
    CancelEdit(String),
    SaveEdit(String),
    Delete(String),
    DismissError,
}

/// View-local state that is not part of the todo list itself
#[derive(Debug, Default)]
pub struct UiState {
    /// Contents of the add form
    pub new_title: String,
    /// Title drafts of rows in edit mode, by item id
    pub drafts: HashMap<String, String>,
    /// Last surfaced error
    pub error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn show_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
    }
}
