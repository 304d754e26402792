//! Beanlink CLI - GS1 Digital Links and webhook signatures
//!
//! Builds and reads the Digital Links printed on coffee bags, and signs or
//! checks the webhook payloads exchanged with roasters and resolvers.

use beanlink_core::config::Config;
use beanlink_core::error::exit_codes;
use beanlink_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;
mod input;

use commands::{hmac, link};

/// GS1 Digital Link and webhook HMAC toolkit
#[derive(Parser)]
#[command(name = "beanlink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a beanlink.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs and error reports as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, parse and validate GS1 Digital Links
    Link {
        #[command(subcommand)]
        command: link::LinkCommand,
    },

    /// Sign and verify webhook payloads
    Hmac {
        #[command(subcommand)]
        command: hmac::HmacCommand,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_json = cli.log_json;

    match run(cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            let structured = e.downcast_ref::<beanlink_core::Error>();
            match structured {
                Some(err) if log_json => report_json(err),
                _ => eprintln!("{} {}", "Error:".red().bold(), e),
            }
            exit_code(structured.map_or(exit_codes::FAILURE, |err| err.code.exit_code()))
        }
    }
}

fn report_json(err: &beanlink_core::Error) {
    match serde_json::to_string(&err.to_report()) {
        Ok(line) => eprintln!("{line}"),
        Err(_) => eprintln!("{err}"),
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = Config::load(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.telemetry.log_level.clone()
    };
    beanlink_telemetry::init_with_config(
        TelemetryConfig::default()
            .with_log_level(log_level)
            .with_json(cli.log_json),
    )?;
    tracing::debug!(path = ?config.path, "Configuration loaded");

    match cli.command {
        Commands::Link { command } => link::run(command, &config),
        Commands::Hmac { command } => hmac::run(command, &config),
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
