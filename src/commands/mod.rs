//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod item;
mod list;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Rejected promises (backend `Err`) come back as `Err(JsValue)`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend errors arrive as plain strings
fn invoke_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use item::*;
pub use list::*;
