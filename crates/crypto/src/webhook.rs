//! Outbound webhook signing and inbound webhook checks.
//!
//! Outbound calls carry two headers: [`SIGNATURE_HEADER`] with the body's HMAC
//! and [`DATE_HEADER`] with the send time. The signature covers the payload
//! only; the date is checked separately for freshness.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    format_http_date, is_valid_hmac_format, sign_hmac_sha256, validate_clock_skew, verify_hmac,
    CryptoError, Result,
};

/// Header carrying the `sha256=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Header carrying the HTTP-date the request was signed at.
pub const DATE_HEADER: &str = "Date";

/// Signature and timestamp to attach to an outbound webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSignature {
    /// Value for the `X-Signature` header
    pub signature: String,
    /// Value for the `Date` header
    pub timestamp: String,
}

/// Sign an outbound webhook payload.
///
/// When `timestamp` is `None` the current time is used, formatted as an
/// HTTP-date. The timestamp is not part of the signed material.
pub fn create_webhook_signature(
    payload: &str,
    secret: &str,
    timestamp: Option<&str>,
) -> WebhookSignature {
    let timestamp = timestamp.map_or_else(|| format_http_date(Utc::now()), str::to_owned);
    WebhookSignature {
        signature: sign_hmac_sha256(payload, secret),
        timestamp,
    }
}

/// Header values received on an inbound webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeaders {
    /// `X-Signature` header, if sent
    pub signature: Option<String>,
    /// `Date` header, if sent
    pub date: Option<String>,
}

impl WebhookHeaders {
    /// Creates headers from the two raw values.
    pub fn new(signature: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
            date: Some(date.into()),
        }
    }
}

impl From<&WebhookSignature> for WebhookHeaders {
    fn from(sig: &WebhookSignature) -> Self {
        Self::new(sig.signature.clone(), sig.timestamp.clone())
    }
}

/// Check an inbound webhook, reporting the first reason to reject it.
///
/// Order: signature header present, signature well-formed, `Date` present,
/// `Date` within `max_skew_seconds`, signature matches the body.
///
/// # Errors
/// A [`CryptoError`] naming the failed check. Callers should answer with
/// 401 and must not retry.
pub fn verify_webhook(
    headers: &WebhookHeaders,
    body: &str,
    secret: &str,
    max_skew_seconds: u64,
) -> Result<()> {
    let signature = non_empty(headers.signature.as_deref())
        .ok_or(CryptoError::MissingHeader(SIGNATURE_HEADER))?;

    if !is_valid_hmac_format(signature) {
        return Err(CryptoError::InvalidSignature(
            "expected sha256=<64 hex characters>".to_string(),
        ));
    }

    let date = non_empty(headers.date.as_deref()).ok_or(CryptoError::MissingHeader(DATE_HEADER))?;

    if !validate_clock_skew(date, max_skew_seconds) {
        tracing::warn!(date, max_skew_seconds, "Webhook rejected: stale timestamp");
        return Err(CryptoError::StaleTimestamp(date.to_string()));
    }

    if !verify_hmac(signature, body, secret) {
        tracing::warn!("Webhook rejected: signature mismatch");
        return Err(CryptoError::SignatureMismatch);
    }

    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
