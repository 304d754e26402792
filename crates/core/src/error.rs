//! Structured application errors with codes and recovery suggestions
//!
//! Library crates keep their own `thiserror` enums; binaries lift them into
//! [`Error`] so every failure carries:
//! - An error code for programmatic handling
//! - Optional context and a recovery suggestion
//! - A serializable report for JSON logging

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    /// Any other I/O failure
    IoError = 2000,
    /// A named input file does not exist
    FileNotFound = 2001,

    // Configuration errors (3xxx)
    /// An explicit `--config` path does not exist
    ConfigNotFound = 3001,
    /// The configuration file is not valid TOML
    ConfigParseError = 3002,
    /// A configuration value is out of range
    InvalidConfigValue = 3004,

    // Validation errors (6xxx)
    /// A command argument was rejected
    InvalidInput = 6001,
    /// Input could not be decoded as JSON
    InvalidFormat = 6002,

    // Security errors (7xxx)
    /// Signing or secret generation failed
    SecurityError = 7000,
    /// No shared secret was supplied
    MissingSecret = 7003,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            6 => "Validation",
            7 => "Security",
            _ => "Unknown",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            6 => exit_codes::VALIDATION_ERROR,
            7 => exit_codes::SECURITY_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    /// A named input file does not exist
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    /// An explicit configuration path does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .beanlink.toml file or use --config to specify a path")
    }

    /// A configuration field holds an unusable value
    pub fn invalid_config_value(field: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid value for {}: {}", field, message.into()),
        )
    }

    /// A command argument was rejected
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Signing or secret generation failed
    pub fn security(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SecurityError, message)
    }

    /// No secret on the command line or in `env_var`
    pub fn missing_secret(env_var: &str) -> Self {
        Self::new(ErrorCode::MissingSecret, "No signing secret provided")
            .with_suggestion(format!("Pass --secret or set {}", env_var))
    }
}

/// Serializable error report, printed on stderr when logging as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Display form of the code, e.g. `E6001`
    pub code_str: String,
    /// Category derived from the code
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Rendered source error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command succeeded
    pub const SUCCESS: i32 = 0;
    /// Unclassified failure
    pub const FAILURE: i32 = 1;
    /// Input was rejected
    pub const VALIDATION_ERROR: i32 = 2;
    /// Configuration missing or invalid
    pub const CONFIG_ERROR: i32 = 3;
    /// Signature, freshness or secret failure
    pub const SECURITY_ERROR: i32 = 5;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InvalidFormat, format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::MissingSecret.to_string(), "E7003");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::InvalidConfigValue.category(), "Configuration");
        assert_eq!(ErrorCode::MissingSecret.category(), "Security");
    }

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(ErrorCode::ConfigParseError.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(ErrorCode::InvalidInput.exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(ErrorCode::MissingSecret.exit_code(), exit_codes::SECURITY_ERROR);
        assert_eq!(ErrorCode::IoError.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_missing_secret_suggests_env_var() {
        let err = Error::missing_secret("BEANLINK_WEBHOOK_SECRET");
        assert_eq!(err.code, ErrorCode::MissingSecret);
        assert!(err.to_string().contains("BEANLINK_WEBHOOK_SECRET"));
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::security("Signature mismatch").with_context("While checking webhook");

        let json = serde_json::to_string(&err.to_report()).unwrap();

        assert!(json.contains("E7000"));
        assert!(json.contains("Security"));
        assert!(json.contains("While checking webhook"));
        assert!(!json.contains("suggestion"));
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::invalid_input("bad path"));
        let err = result.context("Parsing /01/x").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("Parsing /01/x"));
        assert_eq!(err.code.exit_code(), exit_codes::VALIDATION_ERROR);
    }
}
