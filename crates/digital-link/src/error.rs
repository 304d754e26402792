//! Error types for the digital-link crate.

use thiserror::Error;

/// Result type alias for Digital Link operations.
pub type Result<T> = std::result::Result<T, DigitalLinkError>;

/// Errors that can occur while reading a Digital Link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitalLinkError {
    /// The input could not be parsed as an absolute URL
    #[error("Invalid URL format")]
    InvalidUrl,

    /// A path segment did not percent-decode to valid UTF-8
    #[error("Malformed value for AI {ai}: {segment}")]
    MalformedValue {
        /// Application Identifier the value belonged to
        ai: String,
        /// Raw, still-encoded segment
        segment: String,
    },
}

/// Error code for integration with beanlink-core error handling.
/// Range: 11xxx for Digital Link errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalLinkErrorCode {
    /// Invalid URL
    InvalidUrl = 11001,
    /// Undecodable path segment
    MalformedValue = 11002,
}

impl DigitalLinkError {
    /// Returns the error code for this error.
    pub fn code(&self) -> DigitalLinkErrorCode {
        match self {
            DigitalLinkError::InvalidUrl => DigitalLinkErrorCode::InvalidUrl,
            DigitalLinkError::MalformedValue { .. } => DigitalLinkErrorCode::MalformedValue,
        }
    }
}
