//! Payload Preview Component
//!
//! Collapsible view of the JSON the list serializes to. Refreshed from the
//! backend whenever the list changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PayloadPreview() -> impl IntoView {
    let store = use_app_store();
    let (payload, set_payload) = signal(String::new());

    Effect::new(move |_| {
        store.items().track();
        spawn_local(async move {
            match commands::serialize_list().await {
                Ok(json) => set_payload.set(json),
                Err(e) => web_sys::console::error_1(&format!("[PREVIEW] {}", e).into()),
            }
        });
    });

    view! {
        <details class="payload-preview">
            <summary>"Current list (JSON)"</summary>
            <pre>{move || payload.get()}</pre>
        </details>
    }
}
