//! Send List Button Component
//!
//! Asks the backend to prepare the payload for the trolley, shows a
//! short-lived status line and keeps the exact JSON that was prepared.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_clear_status, store_set_receipt, store_set_status, use_app_store, AppStateStoreFields};

/// How long a status message stays visible
const STATUS_VISIBLE_MS: u32 = 3_000;

#[component]
pub fn SendListButton() -> impl IntoView {
    let store = use_app_store();
    let (sending, set_sending) = signal(false);

    let send = move |_| {
        set_sending.set(true);
        spawn_local(async move {
            let version = match commands::submit_list().await {
                Ok(receipt) => store_set_receipt(&store, receipt),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SEND] submit failed: {}", e).into());
                    store_set_status(&store, format!("Could not prepare list: {}", e))
                }
            };
            set_sending.set(false);

            TimeoutFuture::new(STATUS_VISIBLE_MS).await;
            store_clear_status(&store, version);
        });
    };

    view! {
        <div class="send-row">
            <button class="send-btn" disabled=move || sending.get() on:click=send>
                {move || if sending.get() { "Preparing..." } else { "Send to trolley" }}
            </button>
            {move || store.status().get().map(|msg| view! { <p class="status">{msg}</p> })}
            {move || store.last_payload().get().map(|payload| view! {
                <div class="sent-payload">
                    <span class="sent-payload-label">"Last prepared payload"</span>
                    <pre>{payload}</pre>
                </div>
            })}
        </div>
    }
}
