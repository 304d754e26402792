//! `beanlink hmac` - sign and verify webhook payloads

use anyhow::Result;
use beanlink_cli::output::{print_json, Status};
use beanlink_core::config::Config;
use beanlink_core::error::exit_codes;
use beanlink_core::Error;
use beanlink_crypto::{
    create_webhook_signature, extract_hmac_digest, generate_hmac_secret, is_valid_hmac_format,
    sign_hmac_sha256, validate_clock_skew, verify_hmac, verify_webhook, CryptoError,
    WebhookHeaders, DATE_HEADER, SIGNATURE_HEADER,
};
use beanlink_telemetry::Timer;
use clap::Subcommand;

use crate::input::{BodyArgs, SecretArgs};

#[derive(Subcommand)]
pub enum HmacCommand {
    /// Sign a body, printing `sha256=<hex>`
    Sign {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        secret: SecretArgs,
    },

    /// Verify a signature header against a body (exit 0 if valid, 5 if not)
    Verify {
        /// Value of the X-Signature header
        #[arg(long)]
        signature: String,

        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        secret: SecretArgs,
    },

    /// Check the `sha256=<64 hex>` shape of a signature (exit 0 if valid, 2 if not)
    Format {
        /// Signature to check
        signature: String,
    },

    /// Print the hex digest of a well-formed signature
    Digest {
        /// Signature to read
        signature: String,
    },

    /// Generate a new base64 shared secret
    Secret {
        /// Random bytes (defaults to webhook.secret_length from config)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check a request date against the local clock (exit 0 if fresh, 5 if not)
    Skew {
        /// Request date, e.g. "Tue, 05 Mar 2024 08:12:31 GMT"
        date: String,

        /// Allowed skew in seconds (defaults to webhook.max_skew_seconds)
        #[arg(long)]
        max_skew: Option<u64>,
    },

    /// Produce X-Signature and Date headers for an outbound webhook
    Webhook {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        secret: SecretArgs,

        /// Use this Date value instead of the current time
        #[arg(long)]
        timestamp: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the full inbound webhook check: headers, freshness, signature
    CheckWebhook {
        /// Value of the X-Signature header
        #[arg(long)]
        signature: Option<String>,

        /// Value of the Date header
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        secret: SecretArgs,

        /// Allowed skew in seconds (defaults to webhook.max_skew_seconds)
        #[arg(long)]
        max_skew: Option<u64>,
    },
}

/// Run an hmac subcommand, returning the process exit code
pub fn run(command: HmacCommand, config: &Config) -> Result<i32> {
    let webhook = &config.schema.webhook;

    match command {
        HmacCommand::Sign { body, secret } => {
            let (body, secret) = (body.read()?, secret.resolve(webhook)?);
            println!("{}", sign_hmac_sha256(&body, &secret));
            Ok(exit_codes::SUCCESS)
        }

        HmacCommand::Verify { signature, body, secret } => {
            let (body, secret) = (body.read()?, secret.resolve(webhook)?);
            let timer = Timer::start("hmac.verify");
            let valid = verify_hmac(&signature, &body, &secret);
            timer.stop();
            Ok(report(valid, "Signature valid", "Signature mismatch", exit_codes::SECURITY_ERROR))
        }

        HmacCommand::Format { signature } => Ok(report(
            is_valid_hmac_format(&signature),
            "Well-formed signature",
            "Expected sha256=<64 hex characters>",
            exit_codes::VALIDATION_ERROR,
        )),

        HmacCommand::Digest { signature } => match extract_hmac_digest(&signature) {
            Some(digest) => {
                println!("{digest}");
                Ok(exit_codes::SUCCESS)
            }
            None => Err(Error::invalid_input("Expected sha256=<64 hex characters>").into()),
        },

        HmacCommand::Secret { length } => {
            let length = length.unwrap_or(webhook.secret_length);
            let secret = generate_hmac_secret(length).map_err(|e| match e {
                CryptoError::SecretTooLong(_) => Error::invalid_input(e.to_string()),
                _ => Error::security(e.to_string()),
            })?;
            println!("{secret}");
            Ok(exit_codes::SUCCESS)
        }

        HmacCommand::Skew { date, max_skew } => {
            let max = max_skew.unwrap_or(webhook.max_skew_seconds);
            Ok(report(
                validate_clock_skew(&date, max),
                &format!("Within {max}s of local time"),
                &format!("Outside {max}s of local time or not a date"),
                exit_codes::SECURITY_ERROR,
            ))
        }

        HmacCommand::Webhook { body, secret, timestamp, json } => {
            let (body, secret) = (body.read()?, secret.resolve(webhook)?);
            let sig = create_webhook_signature(&body, &secret, timestamp.as_deref());
            if json {
                print_json(&sig)?;
            } else {
                println!("{SIGNATURE_HEADER}: {}", sig.signature);
                println!("{DATE_HEADER}: {}", sig.timestamp);
            }
            Ok(exit_codes::SUCCESS)
        }

        HmacCommand::CheckWebhook { signature, date, body, secret, max_skew } => {
            let (body, secret) = (body.read()?, secret.resolve(webhook)?);
            let headers = WebhookHeaders { signature, date };
            let max = max_skew.unwrap_or(webhook.max_skew_seconds);

            let timer = Timer::start("hmac.check_webhook");
            let outcome = verify_webhook(&headers, &body, &secret, max);
            timer.stop();

            match outcome {
                Ok(()) => {
                    Status::success("Webhook accepted");
                    Ok(exit_codes::SUCCESS)
                }
                Err(e) => {
                    Status::error(&format!("Webhook rejected: {e}"));
                    Ok(rejection_exit_code(&e))
                }
            }
        }
    }
}

fn report(ok: bool, success: &str, failure: &str, failure_code: i32) -> i32 {
    if ok {
        Status::success(success);
        exit_codes::SUCCESS
    } else {
        Status::error(failure);
        failure_code
    }
}

fn rejection_exit_code(err: &CryptoError) -> i32 {
    match err {
        CryptoError::MissingHeader(_) | CryptoError::InvalidSignature(_) => {
            exit_codes::VALIDATION_ERROR
        }
        _ => exit_codes::SECURITY_ERROR,
    }
}
