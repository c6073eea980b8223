//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for shopping list access.
//! Implementations can keep the list in memory, behind IPC, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Item, ShoppingList};

/// Access to the authoritative shopping list
///
/// Every method is applied atomically; concurrent callers are serialized.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// All items, in list order
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// Add one to the item at `index`, returning the updated item
    async fn increment(&self, index: usize) -> DomainResult<Item>;

    /// Remove one from the item at `index` (never below zero)
    async fn decrement(&self, index: usize) -> DomainResult<Item>;

    /// Copy of the whole list, for serialization
    async fn snapshot(&self) -> DomainResult<ShoppingList>;
}
