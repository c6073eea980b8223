//! Tauri Commands for Item Quantities
//!
//! Exposes the per-item list operations to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::Item;
use crate::AppState;

/// List all items in display order
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>) -> Result<Vec<Item>, String> {
    state.list_repo.list().await.map_err(|e| e.to_string())
}

/// Add one to the item at `index`
#[tauri::command]
pub async fn increment_item(state: State<'_, AppState>, index: usize) -> Result<Item, String> {
    let item = state.list_repo.increment(index).await.map_err(|e| {
        tracing::warn!(index, error = %e, "increment rejected");
        e.to_string()
    })?;
    tracing::debug!(index, name = item.name(), quantity = item.quantity(), "incremented");
    Ok(item)
}

/// Remove one from the item at `index`; a zero quantity is left alone
#[tauri::command]
pub async fn decrement_item(state: State<'_, AppState>, index: usize) -> Result<Item, String> {
    let item = state.list_repo.decrement(index).await.map_err(|e| {
        tracing::warn!(index, error = %e, "decrement rejected");
        e.to_string()
    })?;
    tracing::debug!(index, name = item.name(), quantity = item.quantity(), "decremented");
    Ok(item)
}

/// Title for the screen header
#[tauri::command]
pub fn get_app_title(state: State<'_, AppState>) -> String {
    state.config.title.clone()
}
