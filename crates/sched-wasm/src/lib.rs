//! WASM bindings for sched-core.
//!
//! Exposes the workbook → iCalendar conversion to the browser. The page reads
//! the uploaded `.xlsx` into a `Uint8Array`, calls `processFile`, and offers
//! the returned bytes as an `.ics` download.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p sched-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/sched_wasm.wasm
//! ```

use sched_core::ConvertConfig;
use wasm_bindgen::prelude::*;

/// Convert workbook bytes with the given configuration. Errors are rendered
/// as `"error: <message>"`.
fn convert(data: &[u8], config: &ConvertConfig) -> Result<Vec<u8>, String> {
    sched_core::convert_workbook_bytes(data, config).map_err(|e| format!("error: {}", e))
}

/// Parse a JSON `ConvertConfig`. Missing fields take their defaults.
fn parse_config(config_json: &str) -> Result<ConvertConfig, String> {
    serde_json::from_str(config_json).map_err(|e| format!("error: invalid config JSON: {}", e))
}

/// Convert an uploaded workbook into an iCalendar document with the default
/// configuration.
///
/// Returns the `.ics` bytes. Failures are thrown rather than returned in
/// place of the bytes: wrap the call in `try`/`catch`, where the caught value
/// is the `"error: ..."` string.
#[wasm_bindgen(js_name = "processFile")]
pub fn process_file(data: &[u8]) -> Result<Vec<u8>, JsValue> {
    convert(data, &ConvertConfig::default()).map_err(|e| JsValue::from_str(&e))
}

/// Like [`process_file`], with a JSON configuration object such as
/// `{"timezone":"America/Chicago","reminder_minutes":10}`.
#[wasm_bindgen(js_name = "processFileWithConfig")]
pub fn process_file_with_config(data: &[u8], config_json: &str) -> Result<Vec<u8>, JsValue> {
    parse_config(config_json)
        .and_then(|config| convert(data, &config))
        .map_err(|e| JsValue::from_str(&e))
}
