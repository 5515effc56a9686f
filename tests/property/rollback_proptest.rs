//! Property-based tests for optimistic rollback
//!
//! However completions interleave, once every request has finished the item
//! shows the value of the last mutation that succeeded, or its original
//! value when none did.

use proptest::prelude::*;
use todolist::egui_app::state::Ticket;
use todolist::egui_app::{ApiError, ApiResponse, TodoStore};

use crate::common::stored_item;

fn outcomes_and_order() -> impl Strategy<Value = (Vec<bool>, Vec<usize>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

fn store_with_item() -> TodoStore {
    let mut store = TodoStore::new();
    let load = store.load();
    store
        .complete(load.ticket, Ok(ApiResponse::Items(vec![stored_item("a", "demo", "v0", false, 1)])))
        .unwrap();
    store
}

fn issue_updates(store: &mut TodoStore, count: usize) -> Vec<Ticket> {
    (1..=count)
        .map(|i| {
            let item = stored_item("a", "demo", &format!("v{}", i), false, 1);
            store.update(item).unwrap().unwrap().ticket
        })
        .collect()
}

fn outcome(ok: bool, success: ApiResponse) -> Result<ApiResponse, ApiError> {
    if ok {
        Ok(success)
    } else {
        Err(ApiError::Network("offline".to_string()))
    }
}

fn expected_title(outcomes: &[bool]) -> String {
    outcomes
        .iter()
        .rposition(|ok| *ok)
        .map(|i| format!("v{}", i + 1))
        .unwrap_or_else(|| "v0".to_string())
}

proptest! {
    #[test]
    fn test_final_value_is_last_success((outcomes, order) in outcomes_and_order()) {
        let mut store = store_with_item();
        let tickets = issue_updates(&mut store, outcomes.len());

        for &i in &order {
            let result = store.complete(tickets[i], outcome(outcomes[i], ApiResponse::Updated));
            prop_assert_eq!(result.is_ok(), outcomes[i]);
        }

        prop_assert_eq!(store.pending_count(), 0);
        prop_assert_eq!(store.items().len(), 1);
        prop_assert_eq!(store.items()[0].title.clone(), expected_title(&outcomes));
    }

    #[test]
    fn test_updates_then_remove((outcomes, order) in outcomes_and_order()) {
        // The last mutation is a remove instead of an update
        let updates = outcomes.len() - 1;
        let mut store = store_with_item();
        let mut tickets = issue_updates(&mut store, updates);
        tickets.push(store.remove("a").unwrap().ticket);
        prop_assert!(store.items().is_empty());

        for &i in &order {
            let success = if i == updates { ApiResponse::Deleted } else { ApiResponse::Updated };
            let _ = store.complete(tickets[i], outcome(outcomes[i], success));
        }

        prop_assert_eq!(store.pending_count(), 0);
        if outcomes[updates] {
            prop_assert!(store.items().is_empty());
        } else {
            prop_assert_eq!(store.items().len(), 1);
            prop_assert_eq!(store.items()[0].title.clone(), expected_title(&outcomes[..updates]));
        }
    }
}
