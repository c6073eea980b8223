//! Item Row Component
//!
//! Name, quantity and the −/+ buttons for one list entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_begin_request, store_finish_request, use_app_store, AppStateStoreFields};

/// A single item row
#[component]
pub fn ItemRow(index: usize) -> impl IntoView {
    let store = use_app_store();

    let name = move || {
        store.items().with(|items| items.get(index).map(|item| item.name.clone()).unwrap_or_default())
    };
    let quantity = move || {
        store.items().with(|items| items.get(index).map(|item| item.quantity).unwrap_or(0))
    };

    let busy = move || store.pending().with(|pending| pending.contains(&index));

    // One request per row at a time, so replies cannot land out of order
    let increment = move |_| {
        if !store_begin_request(&store, index) {
            return;
        }
        spawn_local(async move {
            let reply = match commands::increment_item(index).await {
                Ok(item) => Some(item),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROW] increment {} failed: {}", index, e).into());
                    None
                }
            };
            store_finish_request(&store, index, reply);
        });
    };

    // Backend leaves zero alone; the button is disabled to match
    let decrement = move |_| {
        if !store_begin_request(&store, index) {
            return;
        }
        spawn_local(async move {
            let reply = match commands::decrement_item(index).await {
                Ok(item) => Some(item),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROW] decrement {} failed: {}", index, e).into());
                    None
                }
            };
            store_finish_request(&store, index, reply);
        });
    };

    view! {
        <div class="item-row">
            <span class="item-text">{name}</span>
            <div class="item-controls">
                <button
                    class="qty-btn decrement"
                    title="Remove one"
                    disabled=move || busy() || quantity() == 0
                    on:click=decrement
                >
                    "−"
                </button>
                <span class="item-quantity">{quantity}</span>
                <button class="qty-btn increment" title="Add one" disabled=busy on:click=increment>
                    "+"
                </button>
            </div>
        </div>
    }
}
