//! Item List Component
//!
//! Renders one row per item. Rows are keyed by index since the list
//! never grows or shrinks after load.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let len = move || store.items().with(|items| items.len());

    view! {
        <div class="item-list">
            <Show
                when=move || { len() > 0 }
                fallback=|| view! { <p class="empty-hint">"Loading list..."</p> }
            >
                <For
                    each=move || 0..len()
                    key=|index| *index
                    children=move |index| view! { <ItemRow index=index /> }
                />
            </Show>
        </div>
    }
}
