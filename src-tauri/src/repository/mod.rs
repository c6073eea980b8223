//! Repository Layer
//!
//! Shopping list access abstraction and its in-memory implementation.

mod traits;
mod memory_repo;


pub use traits::ShoppingListRepository;
pub use memory_repo::MemoryShoppingListRepository;
