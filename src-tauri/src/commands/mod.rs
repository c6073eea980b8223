//! Commands Layer
//!
//! Tauri command handlers that bridge the screen to the shopping list.

mod item_cmd;
mod list_cmd;

pub use item_cmd::*;
pub use list_cmd::*;
