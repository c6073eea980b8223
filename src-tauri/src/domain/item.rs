//! Item Entity
//!
//! A named shopping-list entry with a non-negative quantity.

use serde::{Deserialize, Serialize};

/// A shopping list entry
///
/// The name is fixed at creation; only the quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: u32,
}

impl Item {
    /// Create an item with quantity 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add one, saturating at `u32::MAX`
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Remove one if any are left. Returns whether the quantity changed.
    pub fn decrement(&mut self) -> bool {
        if self.quantity > 0 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }

    /// Borrowed `{name, quantity}` view used for the outgoing payload
    pub fn record(&self) -> ItemRecord<'_> {
        ItemRecord {
            name: &self.name,
            quantity: self.quantity,
        }
    }
}

/// Wire record for one item in the outgoing JSON array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRecord<'a> {
    pub name: &'a str,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Apples");
        assert_eq!(item.name(), "Apples");
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut item = Item::new("Apples");
        item.increment();
        item.increment();
        assert_eq!(item.quantity(), 2);

        assert!(item.decrement());
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut item = Item::new("Bananas");
        assert!(!item.decrement());
        assert!(!item.decrement());
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut item = Item {
            name: "Oranges".to_string(),
            quantity: u32::MAX,
        };
        item.increment();
        assert_eq!(item.quantity(), u32::MAX);
    }

    #[test]
    fn test_item_serialization() {
        let mut item = Item::new("Apples");
        item.increment();

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Apples","quantity":1}"#);
        assert_eq!(serde_json::to_string(&item.record()).unwrap(), json);

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
