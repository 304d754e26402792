//! WASM bindings for request-signing utilities.

use wasm_bindgen::prelude::*;

/// Sign a body, returning `sha256=<hex>`.
#[wasm_bindgen(js_name = signHmacSHA256)]
pub fn sign_hmac_sha256(body: &str, secret: &str) -> String {
    crate::sign_hmac_sha256(body, secret)
}

/// Verify a `sha256=<hex>` header against a body (constant-time).
#[wasm_bindgen(js_name = verifyHmac)]
pub fn verify_hmac(signature_header: &str, body: &str, secret: &str) -> bool {
    crate::verify_hmac(signature_header, body, secret)
}

/// Check the `sha256=<64 hex>` shape without a secret.
#[wasm_bindgen(js_name = isValidHmacFormat)]
pub fn is_valid_hmac_format(signature: &str) -> bool {
    crate::is_valid_hmac_format(signature)
}

/// Extract the hex digest, or `undefined` if the format is wrong.
#[wasm_bindgen(js_name = extractHmacDigest)]
pub fn extract_hmac_digest(signature: &str) -> Option<String> {
    crate::extract_hmac_digest(signature).map(str::to_owned)
}

/// Generate a base64 secret of `length` random bytes (default 32).
#[wasm_bindgen(js_name = generateHmacSecret)]
pub fn generate_hmac_secret(length: Option<usize>) -> Result<String, JsValue> {
    crate::generate_hmac_secret(length.unwrap_or(crate::DEFAULT_SECRET_LENGTH))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a request date against the current time (default 300 seconds).
#[wasm_bindgen(js_name = validateClockSkew)]
pub fn validate_clock_skew(request_date: &str, max_skew_seconds: Option<u32>) -> bool {
    let max = max_skew_seconds.map_or(crate::DEFAULT_MAX_SKEW_SECONDS, u64::from);
    crate::validate_clock_skew(request_date, max)
}

/// Sign a webhook payload.
///
/// # Returns
/// JSON string `{"signature": ..., "timestamp": ...}`
#[wasm_bindgen(js_name = createWebhookSignature)]
pub fn create_webhook_signature(
    payload: &str,
    secret: &str,
    timestamp: Option<String>,
) -> Result<String, JsValue> {
    let sig = crate::create_webhook_signature(payload, secret, timestamp.as_deref());
    serde_json::to_string(&sig)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
