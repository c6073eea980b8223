//! Item Commands
//!
//! Frontend bindings for per-item backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Item;
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IndexArgs {
    index: usize,
}

// ========================
// Commands
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let result = invoke("list_items", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn increment_item(index: usize) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(&IndexArgs { index }).map_err(|e| e.to_string())?;
    let result = invoke("increment_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn decrement_item(index: usize) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(&IndexArgs { index }).map_err(|e| e.to_string())?;
    let result = invoke("decrement_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_app_title() -> Result<String, String> {
    let result = invoke("get_app_title", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
