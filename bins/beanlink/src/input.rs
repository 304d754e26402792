//! Shared command inputs: request bodies and signing secrets.

use beanlink_core::config::WebhookConfig;
use beanlink_core::{Error, Result, ResultExt};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where to read the request body from. Defaults to stdin.
#[derive(Args, Debug)]
pub struct BodyArgs {
    /// Body text, signed byte-for-byte
    #[arg(long, allow_hyphen_values = true, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,
}

impl BodyArgs {
    /// Read the body without trimming; a trailing newline changes the HMAC.
    pub fn read(&self) -> Result<String> {
        if let Some(body) = &self.body {
            return Ok(body.clone());
        }

        if let Some(path) = &self.body_file {
            return std::fs::read_to_string(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::file_not_found(path),
                _ => Error::from(e).with_context(format!("Reading body from {}", path.display())),
            });
        }

        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(Error::from)
            .context("Reading body from stdin")?;
        Ok(body)
    }
}

/// Shared secret for signing and verification.
#[derive(Args, Debug)]
pub struct SecretArgs {
    /// Shared secret (falls back to the configured environment variable)
    #[arg(long, env = "BEANLINK_WEBHOOK_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

impl SecretArgs {
    /// Resolve the secret from the flag or `config.secret_env`.
    pub fn resolve(&self, config: &WebhookConfig) -> Result<String> {
        if let Some(secret) = self.secret.as_ref().filter(|s| !s.is_empty()) {
            return Ok(secret.clone());
        }

        match std::env::var(&config.secret_env) {
            Ok(secret) if !secret.is_empty() => {
                tracing::debug!(env = %config.secret_env, "Using secret from environment");
                Ok(secret)
            }
            _ => Err(Error::missing_secret(&config.secret_env)),
        }
    }
}
