//! Domain Layer
//!
//! Contains the shopping list entities and their rules.
//! This layer has NO external dependencies (except serde and thiserror).

mod error;
mod item;
mod shopping_list;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemRecord};
pub use shopping_list::{ShoppingList, DEFAULT_SEED_ITEMS};
