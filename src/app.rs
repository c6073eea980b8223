//! Shopping Trolley Frontend App
//!
//! Single screen: header, item list, total and send button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ItemList, PayloadPreview, SendListButton};
use crate::models::total_quantity;
use crate::store::{store_set_items, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide store to all children
    provide_context(store);

    // Load title and items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_app_title().await {
                Ok(title) => store.title().set(title),
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load title: {}", e).into()),
            }
            match commands::list_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store_set_items(&store, loaded);
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load items: {}", e).into()),
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-bar">
                <h1>{move || store.title().get()}</h1>
            </header>

            <main class="main-content">
                <ItemList />

                <p class="item-count">
                    {move || store.items().with(|items| {
                        format!("{} items, {} in trolley", items.len(), total_quantity(items))
                    })}
                </p>

                <SendListButton />
                <PayloadPreview />
            </main>
        </div>
    }
}
