//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
}

/// Result of `submit_list` (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub payload: String,
    pub item_count: usize,
    pub total_quantity: u32,
}

/// Sum of quantities across the list
pub fn total_quantity(items: &[Item]) -> u32 {
    items.iter().fold(0u32, |acc, item| acc.saturating_add(item.quantity))
}
