//! WASM bindings for the Digital Link codec.
//!
//! Struct results cross the boundary as JSON strings so the storefront can
//! `JSON.parse` them without generated TypeScript classes.

use wasm_bindgen::prelude::*;

use crate::DigitalLinkKeys;

fn keys_from_parts(gtin: &str, lot: Option<String>, serial: Option<String>) -> DigitalLinkKeys {
    DigitalLinkKeys {
        gtin: gtin.to_string(),
        lot,
        serial,
    }
}

fn to_json(keys: &DigitalLinkKeys) -> Result<String, JsValue> {
    serde_json::to_string(keys)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Build a full Digital Link URL.
///
/// # Arguments
/// * `gtin` - GTIN, encoded as given
/// * `lot` - Optional lot code
/// * `serial` - Optional serial number
/// * `base` - Resolver base; defaults to `https://id.example.com`
#[wasm_bindgen(js_name = buildDigitalLink)]
pub fn build_digital_link(
    gtin: &str,
    lot: Option<String>,
    serial: Option<String>,
    base: Option<String>,
) -> String {
    let keys = keys_from_parts(gtin, lot, serial);
    crate::build_digital_link(&keys, base.as_deref().unwrap_or(crate::DEFAULT_BASE))
}

/// Build a compact Digital Link for QR codes (no query, no encoding).
#[wasm_bindgen(js_name = buildQRFriendlyDigitalLink)]
pub fn build_qr_friendly_digital_link(
    gtin: &str,
    lot: Option<String>,
    serial: Option<String>,
    base: Option<String>,
) -> String {
    let keys = keys_from_parts(gtin, lot, serial);
    crate::build_qr_friendly_digital_link(&keys, base.as_deref().unwrap_or(crate::DEFAULT_BASE))
}

/// Parse a Digital Link path.
///
/// # Returns
/// JSON string with `gtin` and, when present, `lot` and `serial`
#[wasm_bindgen(js_name = parseDigitalLink)]
pub fn parse_digital_link(pathname: &str) -> Result<String, JsValue> {
    to_json(&crate::parse_digital_link(pathname))
}

/// Check whether a Digital Link path is valid.
#[wasm_bindgen(js_name = isValidDigitalLink)]
pub fn is_valid_digital_link(pathname: &str) -> bool {
    crate::is_valid_digital_link(pathname)
}

/// Extract keys from an absolute Digital Link URL.
///
/// # Returns
/// JSON string of keys, or an error with message `Invalid URL format`
#[wasm_bindgen(js_name = extractDigitalLinkFromUrl)]
pub fn extract_digital_link_from_url(url: &str) -> Result<String, JsValue> {
    let keys = crate::extract_digital_link_from_url(url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&keys)
}
