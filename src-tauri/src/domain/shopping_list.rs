//! Shopping List
//!
//! Ordered, fixed-length list of items. Items are addressed by index and
//! never inserted or removed after creation.

use super::error::{DomainError, DomainResult};
use super::item::{Item, ItemRecord};

/// Items the list starts with when nothing else is configured
pub const DEFAULT_SEED_ITEMS: &[&str] = &["Apples", "Bananas", "Oranges"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::from_names(DEFAULT_SEED_ITEMS.iter().copied())
    }
}

impl ShoppingList {
    /// Build a list with one zero-quantity item per name, in order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(Item::new).collect(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> DomainResult<&Item> {
        self.items.get(index).ok_or(DomainError::ItemNotFound(index))
    }

    fn get_mut(&mut self, index: usize) -> DomainResult<&mut Item> {
        self.items
            .get_mut(index)
            .ok_or(DomainError::ItemNotFound(index))
    }

    /// Add one to the item at `index`
    pub fn increment(&mut self, index: usize) -> DomainResult<&Item> {
        let item = self.get_mut(index)?;
        item.increment();
        Ok(item)
    }

    /// Remove one from the item at `index`; quantity 0 stays 0
    pub fn decrement(&mut self, index: usize) -> DomainResult<&Item> {
        let item = self.get_mut(index)?;
        item.decrement();
        Ok(item)
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Ordered `{name, quantity}` records, ready for JSON encoding
    pub fn serialize(&self) -> Vec<ItemRecord<'_>> {
        self.items.iter().map(Item::record).collect()
    }

    /// JSON array of the serialized records
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(&self.serialize())?)
    }
}
