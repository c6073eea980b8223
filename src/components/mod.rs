//! UI Components
//!
//! Reusable Leptos components.

mod item_row;
mod item_list;
mod send_list_button;
mod payload_preview;

pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use send_list_button::SendListButton;
pub use payload_preview::PayloadPreview;
