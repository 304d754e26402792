//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound for `webhook.secret_length`, in random bytes.
pub const MAX_SECRET_LENGTH: usize = 1024;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[digital_link]`
    #[serde(default)]
    pub digital_link: DigitalLinkConfig,

    /// `[webhook]`
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// `[telemetry]`
    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl ConfigSchema {
    /// Reject values the tools cannot work with.
    pub fn validate(&self) -> Result<()> {
        let base = &self.digital_link.base;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(Error::invalid_config_value(
                "digital_link.base",
                format!("'{}' must start with http:// or https://", base),
            ));
        }
        if !(1..=MAX_SECRET_LENGTH).contains(&self.webhook.secret_length) {
            return Err(Error::invalid_config_value(
                "webhook.secret_length",
                format!("must be between 1 and {} bytes", MAX_SECRET_LENGTH),
            ));
        }
        if self.webhook.secret_env.trim().is_empty() {
            return Err(Error::invalid_config_value("webhook.secret_env", "must not be empty"));
        }
        Ok(())
    }
}

/// Digital Link generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitalLinkConfig {
    /// Resolver base URL prefixed to generated links
    #[serde(default = "default_base")]
    pub base: String,
}

impl Default for DigitalLinkConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
        }
    }
}

fn default_base() -> String {
    "https://id.example.com".to_string()
}

/// Webhook signing and verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Allowed clock skew for inbound `Date` headers
    #[serde(default = "default_max_skew_seconds")]
    pub max_skew_seconds: u64,

    /// Random bytes in a generated secret
    #[serde(default = "default_secret_length")]
    pub secret_length: usize,

    /// Environment variable holding the shared secret
    #[serde(default = "default_secret_env")]
    pub secret_env: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            max_skew_seconds: default_max_skew_seconds(),
            secret_length: default_secret_length(),
            secret_env: default_secret_env(),
        }
    }
}

fn default_max_skew_seconds() -> u64 {
    300
}

fn default_secret_length() -> usize {
    32
}

fn default_secret_env() -> String {
    "BEANLINK_WEBHOOK_SECRET".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySection {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.digital_link.base, "https://id.example.com");
        assert_eq!(schema.webhook.max_skew_seconds, 300);
        assert_eq!(schema.webhook.secret_length, 32);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [webhook]
            max_skew_seconds = 60
            "#,
        )
        .unwrap();
        assert_eq!(schema.webhook.max_skew_seconds, 60);
        assert_eq!(schema.webhook.secret_env, "BEANLINK_WEBHOOK_SECRET");
        assert_eq!(schema.telemetry.log_level, "warn");
    }

    #[test]
    fn test_rejects_bad_base() {
        let mut schema = ConfigSchema::default();
        schema.digital_link.base = "id.example.com".to_string();
        let err = schema.validate().unwrap_err();
        assert!(err.message.contains("digital_link.base"));
    }

    #[test]
    fn test_rejects_zero_secret_length() {
        let mut schema = ConfigSchema::default();
        schema.webhook.secret_length = 0;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_secret_length_cap() {
        let mut schema = ConfigSchema::default();
        schema.webhook.secret_length = MAX_SECRET_LENGTH;
        assert!(schema.validate().is_ok());

        schema.webhook.secret_length = MAX_SECRET_LENGTH + 1;
        let err = schema.validate().unwrap_err();
        assert!(err.message.contains("webhook.secret_length"));
    }
}
