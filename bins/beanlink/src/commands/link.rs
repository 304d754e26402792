//! `beanlink link` - build, read and check GS1 Digital Links

use anyhow::Result;
use beanlink_cli::output::{or_dash, print_json, yes_no, Status};
use beanlink_core::config::Config;
use beanlink_core::error::exit_codes;
use beanlink_core::Error;
use beanlink_digital_link::{
    build_digital_link, build_qr_friendly_digital_link, extract_digital_link_from_url,
    gtin_check_digit_is_valid, is_valid_digital_link, is_valid_gtin, try_parse_digital_link,
    DigitalLinkKeys,
};
use clap::Subcommand;
use serde::Serialize;

#[derive(Subcommand)]
pub enum LinkCommand {
    /// Build a Digital Link URL from GS1 keys
    Build {
        /// GTIN (8-14 digits; not validated)
        #[arg(long)]
        gtin: String,

        /// Lot / batch code
        #[arg(long)]
        lot: Option<String>,

        /// Serial number
        #[arg(long)]
        serial: Option<String>,

        /// Resolver base URL (defaults to digital_link.base from config)
        #[arg(long)]
        base: Option<String>,

        /// Compact QR form: no query string, values inserted verbatim
        #[arg(long)]
        qr: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a Digital Link path such as /01/09506000134352/10/L2305
    Parse {
        /// URL path
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a Digital Link path (exit 0 if valid, 2 if not)
    Validate {
        /// URL path
        path: String,
    },

    /// Extract GS1 keys from an absolute Digital Link URL
    Extract {
        /// Absolute URL
        url: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Full report for a URL or path: keys, validity, check digit, canonical links
    Inspect {
        /// Absolute URL or path starting with '/'
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct BuildOutput<'a> {
    link: &'a str,
    keys: &'a DigitalLinkKeys,
}

#[derive(Serialize)]
struct InspectReport {
    keys: DigitalLinkKeys,
    valid: bool,
    check_digit_valid: bool,
    link: String,
    qr_link: String,
}

/// Run a link subcommand, returning the process exit code
pub fn run(command: LinkCommand, config: &Config) -> Result<i32> {
    match command {
        LinkCommand::Build { gtin, lot, serial, base, qr, json } => {
            let keys = DigitalLinkKeys { gtin, lot, serial };
            let base = base.as_deref().unwrap_or(&config.schema.digital_link.base);
            run_build(&keys, base, qr, json)
        }
        LinkCommand::Parse { path, json } => run_parse(&path, json),
        LinkCommand::Validate { path } => Ok(run_validate(&path)),
        LinkCommand::Extract { url, json } => run_extract(&url, json),
        LinkCommand::Inspect { target, json } => run_inspect(&target, json, config),
    }
}

fn run_build(keys: &DigitalLinkKeys, base: &str, qr: bool, json: bool) -> Result<i32> {
    if !is_valid_gtin(&keys.gtin) {
        Status::warning(&format!("'{}' is not a well-formed GTIN; encoding as given", keys.gtin));
    }

    let link = if qr {
        build_qr_friendly_digital_link(keys, base)
    } else {
        build_digital_link(keys, base)
    };

    if json {
        print_json(&BuildOutput { link: &link, keys })?;
    } else {
        println!("{link}");
    }
    Ok(exit_codes::SUCCESS)
}

fn run_parse(path: &str, json: bool) -> Result<i32> {
    let keys = try_parse_digital_link(path).map_err(|e| Error::invalid_input(e.to_string()))?;
    print_keys(&keys, json)?;
    Ok(exit_codes::SUCCESS)
}

fn run_validate(path: &str) -> i32 {
    if is_valid_digital_link(path) {
        Status::success("Valid Digital Link");
        exit_codes::SUCCESS
    } else {
        Status::error(&format!("Invalid Digital Link: {path}"));
        exit_codes::VALIDATION_ERROR
    }
}

fn run_extract(url: &str, json: bool) -> Result<i32> {
    let keys = extract_digital_link_from_url(url)
        .map_err(|e| Error::invalid_input(e.to_string()).with_context(url.to_string()))?;
    print_keys(&keys, json)?;
    Ok(exit_codes::SUCCESS)
}

fn run_inspect(target: &str, json: bool, config: &Config) -> Result<i32> {
    let keys = if target.starts_with('/') {
        try_parse_digital_link(target).map_err(|e| Error::invalid_input(e.to_string()))?
    } else {
        extract_digital_link_from_url(target).map_err(|e| Error::invalid_input(e.to_string()))?
    };

    let base = &config.schema.digital_link.base;
    let report = InspectReport {
        valid: keys.is_valid(),
        check_digit_valid: gtin_check_digit_is_valid(&keys.gtin),
        link: build_digital_link(&keys, base),
        qr_link: build_qr_friendly_digital_link(&keys, base),
        keys,
    };

    if json {
        print_json(&report)?;
    } else {
        Status::header("Digital Link");
        print_fields(&report.keys);
        Status::field("Valid", yes_no(report.valid));
        Status::field("Check", yes_no(report.check_digit_valid));
        Status::field("Link", &report.link);
        Status::field("QR", &report.qr_link);
    }

    Ok(if report.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_ERROR
    })
}

fn print_keys(keys: &DigitalLinkKeys, json: bool) -> Result<()> {
    if json {
        print_json(keys)?;
    } else {
        Status::header("Digital Link");
        print_fields(keys);
    }
    Ok(())
}

fn print_fields(keys: &DigitalLinkKeys) {
    Status::field("GTIN", if keys.gtin.is_empty() { "-" } else { keys.gtin.as_str() });
    Status::field("Lot", &or_dash(keys.lot.as_deref()));
    Status::field("Serial", &or_dash(keys.serial.as_deref()));
}
