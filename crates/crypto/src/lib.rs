//! Request-signing utilities for Beanlink.
//!
//! This crate provides:
//! - HMAC-SHA256 signatures in `sha256=<hex>` header form
//! - Constant-time signature comparison
//! - Request freshness (clock-skew) checks
//! - Outbound webhook signing and inbound webhook verification
//! - Shared-secret generation
//!
//! Verification helpers never fail loudly: a bad signature or date is `false`.

#![warn(missing_docs)]

mod error;
mod freshness;
mod hmac_impl;
mod secret;
mod timing;
mod webhook;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{CryptoError, CryptoErrorCode, Result};
pub use freshness::{
    format_http_date, parse_http_date, validate_clock_skew, validate_clock_skew_at,
    DEFAULT_MAX_SKEW_SECONDS,
};
pub use hmac_impl::{
    extract_hmac_digest, hmac_sha256, is_valid_hmac_format, sign_hmac_sha256, verify_hmac,
    SIGNATURE_PREFIX,
};
pub use secret::{generate_hmac_secret, DEFAULT_SECRET_LENGTH, MAX_SECRET_LENGTH};
pub use timing::constant_time_compare;
pub use webhook::{
    create_webhook_signature, verify_webhook, WebhookHeaders, WebhookSignature, DATE_HEADER,
    SIGNATURE_HEADER,
};
