//! List Commands
//!
//! Frontend bindings for serializing and submitting the whole list.

use wasm_bindgen::prelude::*;
use crate::models::SubmitReceipt;
use super::{invoke, invoke_error};

/// JSON payload for the current list
pub async fn serialize_list() -> Result<String, String> {
    let result = invoke("serialize_list", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Prepare the list for the trolley
pub async fn submit_list() -> Result<SubmitReceipt, String> {
    let result = invoke("submit_list", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Response error: {}", e))
}
