//! Tauri Commands for the Whole List
//!
//! Serialization of the list into the JSON payload meant for the trolley.

use serde::Serialize;
use tauri::State;

use crate::domain::{DomainResult, ShoppingList};
use crate::AppState;

/// Result of preparing the list for sending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    /// JSON array of `{name, quantity}` records
    pub payload: String,
    pub item_count: usize,
    pub total_quantity: u32,
}

impl SubmitReceipt {
    pub fn from_list(list: &ShoppingList) -> DomainResult<Self> {
        Ok(Self {
            payload: list.to_json()?,
            item_count: list.len(),
            total_quantity: list.total_quantity(),
        })
    }
}

/// JSON payload for the current list
#[tauri::command]
pub async fn serialize_list(state: State<'_, AppState>) -> Result<String, String> {
    let list = state.list_repo.snapshot().await.map_err(|e| e.to_string())?;
    list.to_json().map_err(|e| e.to_string())
}

/// Prepare the list for the trolley.
///
/// The payload is built and logged; no request is sent because the
/// receiving endpoint is not defined.
#[tauri::command]
pub async fn submit_list(state: State<'_, AppState>) -> Result<SubmitReceipt, String> {
    let list = state.list_repo.snapshot().await.map_err(|e| e.to_string())?;
    let receipt = SubmitReceipt::from_list(&list).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize shopping list");
        e.to_string()
    })?;

    tracing::info!(
        items = receipt.item_count,
        total = receipt.total_quantity,
        payload = %receipt.payload,
        "shopping list prepared"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_for_initial_list() {
        let receipt = SubmitReceipt::from_list(&ShoppingList::default()).unwrap();

        assert_eq!(receipt.item_count, 3);
        assert_eq!(receipt.total_quantity, 0);
        assert_eq!(
            receipt.payload,
            r#"[{"name":"Apples","quantity":0},{"name":"Bananas","quantity":0},{"name":"Oranges","quantity":0}]"#
        );
    }

    #[test]
    fn test_receipt_totals() {
        let mut list = ShoppingList::default();
        list.increment(0).unwrap();
        list.increment(0).unwrap();
        list.increment(2).unwrap();

        let receipt = SubmitReceipt::from_list(&list).unwrap();
        assert_eq!(receipt.total_quantity, 3);

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["item_count"], 3);
        assert_eq!(json["payload"].as_str(), Some(receipt.payload.as_str()));
    }
}
