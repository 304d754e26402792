//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
///
/// Plain verification helpers return `bool`; these variants surface only from
/// the operations that explain *why* something was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid signature format
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),

    /// Signature verification failed
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// A required header was absent or empty
    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    /// Request timestamp outside the allowed window or unparseable
    #[error("Stale or invalid timestamp: {0}")]
    StaleTimestamp(String),

    /// The OS random source failed
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    /// Requested secret length is above [`crate::MAX_SECRET_LENGTH`]
    #[error("Secret length {0} exceeds the {max} byte limit", max = crate::MAX_SECRET_LENGTH)]
    SecretTooLong(usize),
}

/// Error code for integration with beanlink-core error handling.
/// Range: 12xxx for crypto errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoErrorCode {
    /// Invalid signature format
    InvalidSignature = 12001,
    /// Signature mismatch
    SignatureMismatch = 12002,
    /// Missing header
    MissingHeader = 12003,
    /// Stale timestamp
    StaleTimestamp = 12004,
    /// Random source failure
    RandomSource = 12005,
    /// Secret length out of range
    SecretTooLong = 12006,
}

impl CryptoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CryptoErrorCode {
        match self {
            CryptoError::InvalidSignature(_) => CryptoErrorCode::InvalidSignature,
            CryptoError::SignatureMismatch => CryptoErrorCode::SignatureMismatch,
            CryptoError::MissingHeader(_) => CryptoErrorCode::MissingHeader,
            CryptoError::StaleTimestamp(_) => CryptoErrorCode::StaleTimestamp,
            CryptoError::RandomSource(_) => CryptoErrorCode::RandomSource,
            CryptoError::SecretTooLong(_) => CryptoErrorCode::SecretTooLong,
        }
    }
}
