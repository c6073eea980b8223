//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Item, SubmitReceipt};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Header title (from backend config)
    pub title: String,
    /// Shopping list mirror, in backend order
    pub items: Vec<Item>,
    /// Rows with a quantity change awaiting the backend reply
    pub pending: HashSet<usize>,
    /// Transient message under the send button
    pub status: Option<String>,
    /// Bumped on every status change so stale clear timers can be ignored
    pub status_version: u32,
    /// JSON produced by the last `submit_list`
    pub last_payload: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            title: "Shopping Trolley".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
}

/// Replace the item at `index` with the backend's updated copy
pub fn store_update_item(store: &AppStore, index: usize, updated_item: Item) {
    if let Some(item) = store.items().write().get_mut(index) {
        *item = updated_item;
    }
}

/// Mark row `index` busy. Returns false if a request is already in flight,
/// so at most one reply per row is outstanding and replies apply in order.
pub fn store_begin_request(store: &AppStore, index: usize) -> bool {
    if store.pending().with_untracked(|pending| pending.contains(&index)) {
        return false;
    }
    store.pending().write().insert(index);
    true
}

/// Clear the busy mark for `index`, applying the reply if there is one
pub fn store_finish_request(store: &AppStore, index: usize, reply: Option<Item>) {
    if let Some(item) = reply {
        store_update_item(store, index, item);
    }
    store.pending().write().remove(&index);
}

/// Show a status message; returns its version for a later `store_clear_status`
pub fn store_set_status(store: &AppStore, message: String) -> u32 {
    store.status().set(Some(message));
    store.status_version().update(|v| *v = v.wrapping_add(1));
    store.status_version().get_untracked()
}

/// Clear the status message unless a newer one replaced it
pub fn store_clear_status(store: &AppStore, version: u32) {
    if store.status_version().get_untracked() == version {
        store.status().set(None);
    }
}

/// Record a submitted list: keep its payload and announce it.
/// Returns the status version, as `store_set_status` does.
pub fn store_set_receipt(store: &AppStore, receipt: SubmitReceipt) -> u32 {
    let message = format!(
        "Prepared {} items ({} total)",
        receipt.item_count, receipt.total_quantity
    );
    store.last_payload().set(Some(receipt.payload));
    store_set_status(store, message)
}
