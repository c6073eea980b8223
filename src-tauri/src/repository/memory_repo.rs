//! In-Memory Shopping List Repository
//!
//! Holds the list for the lifetime of the process; nothing is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Item, ShoppingList};
use super::traits::ShoppingListRepository;

#[derive(Clone)]
pub struct MemoryShoppingListRepository {
    list: Arc<Mutex<ShoppingList>>,
}

impl MemoryShoppingListRepository {
    pub fn new(list: ShoppingList) -> Self {
        Self {
            list: Arc::new(Mutex::new(list)),
        }
    }
}

impl Default for MemoryShoppingListRepository {
    fn default() -> Self {
        Self::new(ShoppingList::default())
    }
}

#[async_trait]
impl ShoppingListRepository for MemoryShoppingListRepository {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        let list = self.list.lock().await;
        Ok(list.items().to_vec())
    }

    async fn increment(&self, index: usize) -> DomainResult<Item> {
        let mut list = self.list.lock().await;
        list.increment(index).cloned()
    }

    async fn decrement(&self, index: usize) -> DomainResult<Item> {
        let mut list = self.list.lock().await;
        list.decrement(index).cloned()
    }

    async fn snapshot(&self) -> DomainResult<ShoppingList> {
        let list = self.list.lock().await;
        Ok(list.clone())
    }
}
