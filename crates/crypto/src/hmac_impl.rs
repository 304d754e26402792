//! HMAC-SHA256 request signatures in `sha256=<hex>` form.

use hmac::{Hmac, Mac};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::Sha256;

use crate::constant_time_compare;

type HmacSha256 = Hmac<Sha256>;

/// Prefix carried by every signature header value.
pub const SIGNATURE_PREFIX: &str = "sha256=";

static SIGNATURE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^sha256=([a-f0-9]{64})$").expect("valid regex"));

/// Generate HMAC-SHA256 signature.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - Message to sign
///
/// # Returns
/// Signature as lowercase hex string (64 chars)
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Sign a request body.
///
/// # Returns
/// `"sha256="` followed by the lowercase hex HMAC of `body` keyed by `secret`
///
/// # Example
/// ```
/// use beanlink_crypto::{sign_hmac_sha256, verify_hmac};
///
/// let sig = sign_hmac_sha256(r#"{"lot":"L2305"}"#, "shared-secret");
/// assert!(sig.starts_with("sha256="));
/// assert!(verify_hmac(&sig, r#"{"lot":"L2305"}"#, "shared-secret"));
/// ```
pub fn sign_hmac_sha256(body: &str, secret: &str) -> String {
    format!(
        "{SIGNATURE_PREFIX}{}",
        hmac_sha256(secret.as_bytes(), body.as_bytes())
    )
}

/// Verify a signature header against a body.
///
/// The comparison is exact and constant-time, so an uppercase digest does not
/// match. Any failure, including an empty header, is reported as `false`.
pub fn verify_hmac(signature_header: &str, body: &str, secret: &str) -> bool {
    if signature_header.is_empty() {
        tracing::debug!("Empty signature header");
        return false;
    }

    let expected = sign_hmac_sha256(body, secret);
    let matches = constant_time_compare(signature_header.as_bytes(), expected.as_bytes());
    if !matches {
        tracing::debug!(
            provided_len = signature_header.len(),
            "HMAC signature did not match"
        );
    }
    matches
}

/// Check that `signature` looks like `sha256=<64 hex chars>` (any case).
pub fn is_valid_hmac_format(signature: &str) -> bool {
    SIGNATURE_FORMAT.is_match(signature)
}

/// Return the 64-char hex digest from a well-formed signature.
pub fn extract_hmac_digest(signature: &str) -> Option<&str> {
    SIGNATURE_FORMAT
        .captures(signature)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
