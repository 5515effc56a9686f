//! # Optimistic Updates
//!
//! Bookkeeping for mutations that have already been applied to the local
//! list but not yet confirmed by the server.
//!
//! ## Features
//!
//! - **Tickets**: every in-flight request is identified by a [`Ticket`]
//! - **Rollback data**: each pending update carries what is needed to undo it
//! - **Per-item versions**: a failed update only reverts the item when no
//!   newer local change to the same item exists
//!
//! ## Version chain
//!
//! Every recorded update on an item gets a fresh `version` from a global
//! clock and remembers the item's previous version as `base_version`. When
//! an update fails:
//!
//! - if it is still the item's latest version, its rollback is returned and
//!   the item's version falls back to `base_version`;
//! - otherwise its snapshot is handed to the next update in the chain (the
//!   pending update whose `base_version` equals the failed `version`), so a
//!   later failure of that successor restores the value from before both.
//!
//! Once an item has no pending update left its version entry is dropped,
//! so the next change to it starts a fresh chain.

use std::collections::{BTreeMap, HashMap};

use crate::shared::Item;

/// Identifies one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// How to undo an optimistic change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollback {
    /// Drop the placeholder inserted by an add
    Discard { temp_id: String },
    /// Put the previous value of an updated item back
    Restore { snapshot: Item },
    /// Re-insert a removed item near its old position
    Reinsert { snapshot: Item, index: usize },
    /// A failed reload empties the list
    Clear,
}

impl Rollback {
    /// Value the item had before the change, if the change had one
    pub fn snapshot(&self) -> Option<&Item> {
        match self {
            Rollback::Restore { snapshot } | Rollback::Reinsert { snapshot, .. } => Some(snapshot),
            Rollback::Discard { .. } | Rollback::Clear => None,
        }
    }

    fn inherit(&mut self, earlier: &Rollback) {
        let Some(previous) = earlier.snapshot() else {
            return;
        };
        match self {
            Rollback::Restore { snapshot } | Rollback::Reinsert { snapshot, .. } => {
                *snapshot = previous.clone();
            }
            Rollback::Discard { .. } | Rollback::Clear => {}
        }
    }
}

/// A mutation applied locally and awaiting the server
#[derive(Debug, Clone)]
pub struct OptimisticUpdate {
    pub ticket: Ticket,
    /// Item the change applies to; `None` for whole-list reloads
    pub item_id: Option<String>,
    pub version: u64,
    pub base_version: u64,
    pub rollback: Rollback,
}

/// Pending optimistic updates, keyed by ticket
#[derive(Debug, Default)]
pub struct OptimisticLedger {
    updates: BTreeMap<Ticket, OptimisticUpdate>,
    versions: HashMap<String, u64>,
    clock: u64,
    next_ticket: u64,
}

impl OptimisticLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change that was just applied locally
    pub fn record(&mut self, item_id: Option<&str>, rollback: Rollback) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.clock += 1;
        let version = self.clock;

        let base_version = match item_id {
            Some(id) => self.versions.insert(id.to_string(), version).unwrap_or(0),
            None => 0,
        };

        self.updates.insert(
            ticket,
            OptimisticUpdate {
                ticket,
                item_id: item_id.map(str::to_string),
                version,
                base_version,
                rollback,
            },
        );
        ticket
    }

    /// Remove a pending update, returning it if it was known
    pub fn take(&mut self, ticket: Ticket) -> Option<OptimisticUpdate> {
        self.updates.remove(&ticket)
    }

    /// Decide what a failed update should undo
    ///
    /// Returns the rollback to perform, or `None` when a newer pending change
    /// to the same item has taken over responsibility for the snapshot (or
    /// when a newer change already succeeded).
    pub fn resolve_failure(&mut self, failed: OptimisticUpdate) -> Option<Rollback> {
        let Some(item_id) = failed.item_id.as_deref() else {
            return Some(failed.rollback);
        };

        let current = self.versions.get(item_id).copied().unwrap_or(0);
        if current == failed.version {
            if failed.base_version == 0 {
                self.versions.remove(item_id);
            } else {
                self.versions.insert(item_id.to_string(), failed.base_version);
            }
            return Some(failed.rollback);
        }

        if let Some(successor) = self.successor_of(item_id, failed.version) {
            successor.base_version = failed.base_version;
            successor.rollback.inherit(&failed.rollback);
        }
        None
    }

    fn successor_of(&mut self, item_id: &str, version: u64) -> Option<&mut OptimisticUpdate> {
        self.updates.values_mut().find(|update| {
            update.base_version == version && update.item_id.as_deref() == Some(item_id)
        })
    }

    /// Drop the version chain of an item once nothing touching it is pending
    pub fn release(&mut self, item_id: &str) {
        if !self.has_pending(item_id) {
            self.versions.remove(item_id);
        }
    }

    /// Pending updates in the order they were recorded
    pub fn pending(&self) -> impl Iterator<Item = &OptimisticUpdate> {
        self.updates.values()
    }

    /// Whether `item_id` is the placeholder of an add still in flight
    pub fn is_pending_create(&self, item_id: &str) -> bool {
        self.updates.values().any(|update| {
            matches!(&update.rollback, Rollback::Discard { temp_id } if temp_id == item_id)
        })
    }

    /// Whether any request touching this item is still in flight
    pub fn has_pending(&self, item_id: &str) -> bool {
        self.updates
            .values()
            .any(|update| update.item_id.as_deref() == Some(item_id))
    }

    pub fn count_pending(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
