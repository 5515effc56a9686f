//! Client State Store
//!
//! `TodoStore` owns the list the UI renders. Mutations are applied locally
//! first and return a [`Dispatch`] describing the request to send; the
//! outcome comes back through [`TodoStore::complete`], which either keeps the
//! optimistic state (adopting server-assigned values) or rolls it back.
//!
//! The store never performs I/O itself. [`crate::egui_app::sync::SyncDriver`]
//! runs the requests and feeds completions back on the UI thread.

pub mod observable;
pub mod optimistic;

use std::cell::OnceCell;

use thiserror::Error;
use uuid::Uuid;

use crate::egui_app::api::{ApiError, ApiRequest, ApiResponse};
use crate::shared::{Filter, Item, SharedError};

pub use observable::{Observable, SubscriptionId};
pub use optimistic::{OptimisticLedger, OptimisticUpdate, Rollback, Ticket};

/// Prefix of ids given to items the server has not confirmed yet
pub const TEMP_ID_PREFIX: &str = "local-";

/// A request produced by a store mutation, tagged for its completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: ApiRequest,
}

/// Errors raised synchronously by store mutations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error("Todo {0} is still being saved")]
    PendingCreate(String),
}

/// Todo list state with optimistic mutations
pub struct TodoStore {
    items: Observable<Vec<Item>>,
    filter: Observable<Filter>,
    filtered: OnceCell<Vec<Item>>,
    ledger: OptimisticLedger,
    latest_load: Option<Ticket>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: Observable::new(Vec::new()),
            filter: Observable::new(Filter::All),
            filtered: OnceCell::new(),
            ledger: OptimisticLedger::new(),
            latest_load: None,
        }
    }

    // ---- reads ----

    pub fn items(&self) -> &[Item] {
        self.items.get()
    }

    pub fn filter(&self) -> Filter {
        *self.filter.get()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Items passing the current filter, in list order
    pub fn filtered_items(&self) -> &[Item] {
        self.filtered.get_or_init(|| {
            let filter = self.filter();
            self.items()
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect()
        })
    }

    /// Text to show instead of the list, `None` when there is something to show
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.filtered_items().is_empty() {
            return None;
        }
        if self.items().is_empty() {
            return Some("No todos yet. Add one above!");
        }
        Some(match self.filter() {
            Filter::Active => "No active todos. All todos are completed!",
            Filter::Completed => "No completed todos yet.",
            Filter::All => "No todos yet. Add one above!",
        })
    }

    /// Whether a request touching this item is still in flight
    pub fn is_syncing(&self, id: &str) -> bool {
        self.ledger.has_pending(id)
    }

    /// Whether this id is the placeholder of an add still awaiting the server
    pub fn is_pending_create(&self, id: &str) -> bool {
        self.ledger.is_pending_create(id)
    }

    pub fn pending_count(&self) -> usize {
        self.ledger.count_pending()
    }

    pub fn subscribe_items(&mut self, subscriber: impl FnMut(&Vec<Item>) + 'static) -> SubscriptionId {
        self.items.subscribe(subscriber)
    }

    pub fn subscribe_filter(&mut self, subscriber: impl FnMut(&Filter) + 'static) -> SubscriptionId {
        self.filter.subscribe(subscriber)
    }

    pub fn unsubscribe_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }

    pub fn unsubscribe_filter(&mut self, id: SubscriptionId) -> bool {
        self.filter.unsubscribe(id)
    }

    // ---- mutations ----

    /// Reload the whole list from the server
    pub fn load(&mut self) -> Dispatch {
        let ticket = self.ledger.record(None, Rollback::Clear);
        self.latest_load = Some(ticket);
        Dispatch {
            ticket,
            request: ApiRequest::List,
        }
    }

    /// Add a new todo at the head of the list
    pub fn add(&mut self, title: &str) -> Result<Dispatch, ClientError> {
        let draft = Item::new(title)?;
        let temp_id = format!("{}{}", TEMP_ID_PREFIX, Uuid::new_v4());
        let local = Item {
            id: temp_id.clone(),
            ..draft.clone()
        };

        self.mutate_items(|items| items.insert(0, local));
        let ticket = self
            .ledger
            .record(Some(&temp_id), Rollback::Discard { temp_id: temp_id.clone() });
        tracing::debug!("Optimistically added {}", temp_id);

        Ok(Dispatch {
            ticket,
            request: ApiRequest::Create(draft),
        })
    }

    /// Replace an item in place; `Ok(None)` when the id is unknown
    pub fn update(&mut self, item: Item) -> Result<Option<Dispatch>, ClientError> {
        let title = Item::validate_title(&item.title)?;
        let item = Item { title, ..item };
        if self.is_pending_create(&item.id) {
            return Err(ClientError::PendingCreate(item.id));
        }

        let Some(index) = self.position(&item.id) else {
            tracing::debug!("Update of unknown todo {} ignored", item.id);
            return Ok(None);
        };

        let snapshot = self.items()[index].clone();
        let updated = item.clone();
        self.mutate_items(|items| items[index] = updated);
        let ticket = self.ledger.record(Some(&item.id), Rollback::Restore { snapshot });

        Ok(Some(Dispatch {
            ticket,
            request: ApiRequest::Update(item),
        }))
    }

    /// Flip the completion flag of an item
    pub fn toggle_complete(&mut self, id: &str) -> Result<Option<Dispatch>, ClientError> {
        match self.get(id) {
            Some(item) => {
                let toggled = item.toggled();
                self.update(toggled)
            }
            None => Ok(None),
        }
    }

    /// Remove an item; unknown ids and unconfirmed items are left alone
    pub fn remove(&mut self, id: &str) -> Option<Dispatch> {
        if self.is_pending_create(id) {
            tracing::debug!("Remove of unsaved todo {} ignored", id);
            return None;
        }
        let index = self.position(id)?;

        let snapshot = self.mutate_items(|items| items.remove(index));
        let ticket = self
            .ledger
            .record(Some(id), Rollback::Reinsert { snapshot, index });

        Some(Dispatch {
            ticket,
            request: ApiRequest::Delete { id: id.to_string() },
        })
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filtered.take();
        self.filter.set(filter);
    }

    /// Apply the outcome of a dispatched request
    ///
    /// Returns the error to show the user, if any. Unknown tickets are
    /// ignored.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Result<(), ApiError> {
        let Some(update) = self.ledger.take(ticket) else {
            tracing::warn!("Completion for unknown ticket {}", ticket.value());
            return Ok(());
        };
        let item_id = update.item_id.clone();

        let result = match outcome {
            Ok(response) => self.reconcile(update, response),
            Err(err) => {
                tracing::warn!("Request {} failed: {}", ticket.value(), err);
                self.roll_back(update);
                Err(err)
            }
        };

        if let Some(item_id) = item_id {
            self.ledger.release(&item_id);
        }
        result
    }

    fn reconcile(&mut self, update: OptimisticUpdate, response: ApiResponse) -> Result<(), ApiError> {
        let expected = matches!(
            (&update.rollback, &response),
            (Rollback::Clear, ApiResponse::Items(_))
                | (Rollback::Discard { .. }, ApiResponse::Created(_))
                | (Rollback::Restore { .. }, ApiResponse::Updated)
                | (Rollback::Reinsert { .. }, ApiResponse::Deleted)
        );
        if !expected {
            let err = ApiError::UnexpectedResponse(response.kind().to_string());
            self.roll_back(update);
            return Err(err);
        }

        let ticket = update.ticket;
        match (update.rollback, response) {
            (Rollback::Clear, ApiResponse::Items(items)) => {
                if self.latest_load != Some(ticket) {
                    tracing::debug!("Ignoring stale load {}", ticket.value());
                    return Ok(());
                }
                tracing::info!("Loaded {} todos", items.len());
                let items = self.with_pending_changes(items);
                self.filtered.take();
                self.items.set(items);
            }
            (Rollback::Discard { temp_id }, ApiResponse::Created(created)) => {
                match (self.position(&temp_id), self.position(&created.id)) {
                    // A reload already brought the server's copy in
                    (Some(_), Some(_)) => {
                        self.mutate_items(|items| items.retain(|item| item.id != temp_id))
                    }
                    (Some(index), None) => self.mutate_items(|items| items[index] = created),
                    (None, None) => self.mutate_items(|items| items.insert(0, created)),
                    (None, Some(_)) => {}
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn roll_back(&mut self, update: OptimisticUpdate) {
        let ticket = update.ticket;
        let Some(rollback) = self.ledger.resolve_failure(update) else {
            tracing::debug!("Rollback of {} superseded by a newer change", ticket.value());
            return;
        };

        match rollback {
            Rollback::Clear => {
                if self.latest_load == Some(ticket) {
                    self.filtered.take();
                    self.items.set(Vec::new());
                }
            }
            Rollback::Discard { temp_id } => {
                if self.position(&temp_id).is_some() {
                    self.mutate_items(|items| items.retain(|item| item.id != temp_id));
                }
            }
            Rollback::Restore { snapshot } => {
                if let Some(index) = self.position(&snapshot.id) {
                    self.mutate_items(|items| items[index] = snapshot);
                }
            }
            Rollback::Reinsert { snapshot, index } => {
                if self.position(&snapshot.id).is_none() {
                    self.mutate_items(|items| {
                        let at = index.min(items.len());
                        items.insert(at, snapshot);
                    });
                }
            }
        }
    }

    /// Lay the changes still in flight over a freshly loaded list
    ///
    /// Unconfirmed adds stay at the head, pending removes stay removed and
    /// pending updates keep their local value.
    fn with_pending_changes(&self, mut loaded: Vec<Item>) -> Vec<Item> {
        let mut placeholders = Vec::new();
        for update in self.ledger.pending() {
            let Some(id) = update.item_id.as_deref() else {
                continue;
            };
            match &update.rollback {
                Rollback::Discard { .. } => {
                    if let Some(local) = self.get(id) {
                        placeholders.push(local.clone());
                    }
                }
                Rollback::Reinsert { .. } => loaded.retain(|item| item.id != id),
                Rollback::Restore { .. } => {
                    if let (Some(local), Some(slot)) =
                        (self.get(id), loaded.iter_mut().find(|item| item.id == id))
                    {
                        *slot = local.clone();
                    }
                }
                Rollback::Clear => {}
            }
        }

        // Newest add first, as `add` inserts at the head
        placeholders.reverse();
        placeholders.extend(loaded);
        placeholders
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items().iter().position(|item| item.id == id)
    }

    fn mutate_items<R>(&mut self, f: impl FnOnce(&mut Vec<Item>) -> R) -> R {
        self.filtered.take();
        self.items.update(f)
    }
}
