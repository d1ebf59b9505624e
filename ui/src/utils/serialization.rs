//! Serialization helpers for handing Rust values to the browser console

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::console_warn;

/// Compact JSON for a serializable value
pub fn serialize_js_safe<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize,
{
    serde_json::to_string(value)
}

/// Convert a value into a plain JS object (maps become objects, not `Map`s)
pub fn to_js_value<T>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error>
where
    T: Serialize,
{
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Log `value` to the console as an inspectable object, falling back to its
/// JSON text when conversion fails.
pub fn log_payload<T>(label: &str, value: &T)
where
    T: Serialize,
{
    match to_js_value(value) {
        Ok(js_value) => gloo_console::log!(label, js_value),
        Err(e) => {
            console_warn!("[Serialization] Could not convert payload to a JS object: {}", e);
            match serialize_js_safe(value) {
                Ok(json) => gloo_console::log!(label, json),
                Err(e) => console_warn!("[Serialization] Could not serialize payload: {}", e),
            }
        }
    }
}
