//! End-to-end tests for the beanlink binary.

use assert_cmd::Command;
use beanlink_crypto::{format_http_date, sign_hmac_sha256};
use predicates::prelude::*;
use std::io::Write;

const GTIN: &str = "09506000134352";
const SECRET: &str = "roaster-shared-secret";
const BODY: &str = r#"{"event":"lot.roasted","lot":"L2305"}"#;

fn beanlink() -> Command {
    let mut cmd = Command::cargo_bin("beanlink").unwrap();
    cmd.env_remove("BEANLINK_WEBHOOK_SECRET").env_remove("RUST_LOG");
    cmd
}

#[test]
fn link_build_uses_default_base() {
    beanlink()
        .args(["link", "build", "--gtin", GTIN, "--lot", "L2305"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "https://id.example.com/01/{GTIN}/10/L2305?linkType=product&ctx=mobile\n"
        )));
}

#[test]
fn link_build_qr_form() {
    beanlink()
        .args(["link", "build", "--gtin", GTIN, "--serial", "S1", "--qr"])
        .args(["--base", "https://trace.beanlink.coffee"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("https://trace.beanlink.coffee/01/{GTIN}/21/S1\n")));
}

#[test]
fn link_build_reads_base_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[digital_link]\nbase = \"https://resolver.test\"").unwrap();

    beanlink()
        .args(["--config", file.path().to_str().unwrap()])
        .args(["link", "build", "--gtin", GTIN])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("https://resolver.test/01/{GTIN}?")));
}

#[test]
fn link_validate_exit_codes() {
    beanlink()
        .args(["link", "validate", format!("/01/{GTIN}").as_str()])
        .assert()
        .success();

    beanlink().args(["link", "validate", "/01/123"]).assert().code(2);
    beanlink().args(["link", "validate", "/10/L2305"]).assert().code(2);
}

#[test]
fn link_extract_json() {
    beanlink()
        .args(["link", "extract", "--json"])
        .arg(format!("https://id.example.com/01/{GTIN}/10/L2305?linkType=product"))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\"gtin\": \"{GTIN}\"")))
        .stdout(predicate::str::contains("\"lot\": \"L2305\""))
        .stdout(predicate::str::contains("serial").not());
}

#[test]
fn link_extract_rejects_bad_url() {
    beanlink()
        .args(["link", "extract", "not a url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid URL format"));
}

#[test]
fn log_json_prints_error_report() {
    beanlink()
        .args(["--log-json", "link", "extract", "not a url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"code_str\":\"E6001\""))
        .stderr(predicate::str::contains("\"category\":\"Validation\""))
        .stderr(predicate::str::contains("Invalid URL format"));
}

#[test]
fn link_inspect_reports_check_digit() {
    beanlink()
        .args(["link", "inspect", "--json", format!("/01/{GTIN}").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"check_digit_valid\": true"))
        .stdout(predicate::str::contains("\"qr_link\""));
}

#[test]
fn hmac_sign_matches_library() {
    beanlink()
        .args(["hmac", "sign", "--body", BODY, "--secret", SECRET])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", sign_hmac_sha256(BODY, SECRET))));
}

#[test]
fn hmac_sign_reads_stdin_and_env_secret() {
    beanlink()
        .args(["hmac", "sign"])
        .env("BEANLINK_WEBHOOK_SECRET", SECRET)
        .write_stdin(BODY)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", sign_hmac_sha256(BODY, SECRET))));
}

#[test]
fn hmac_sign_without_secret_fails() {
    beanlink()
        .args(["hmac", "sign", "--body", BODY])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("--secret"));
}

#[test]
fn hmac_verify_exit_codes() {
    let sig = sign_hmac_sha256(BODY, SECRET);

    beanlink()
        .args(["hmac", "verify", "--signature", sig.as_str(), "--body", BODY, "--secret", SECRET])
        .assert()
        .success();

    beanlink()
        .args(["hmac", "verify", "--signature", sig.as_str(), "--body", "{}", "--secret", SECRET])
        .assert()
        .code(5);
}

#[test]
fn hmac_format_and_digest() {
    let digest = "f".repeat(64);

    beanlink()
        .args(["hmac", "format", format!("sha256={digest}").as_str()])
        .assert()
        .success();
    beanlink().args(["hmac", "format", "sha1=abc"]).assert().code(2);

    beanlink()
        .args(["hmac", "digest", format!("sha256={digest}").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{digest}\n")));
    beanlink().args(["hmac", "digest", "bad"]).assert().code(2);
}

#[test]
fn hmac_secret_length() {
    beanlink()
        .args(["hmac", "secret", "--length", "16"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z0-9+/]{22}==\n$").unwrap());
}

#[test]
fn hmac_secret_rejects_oversized_length() {
    beanlink()
        .args(["hmac", "secret", "--length", "18446744073709551615"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1024 byte limit"));
}

#[test]
fn oversized_secret_length_in_config_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[webhook]\nsecret_length = 4096").unwrap();

    beanlink()
        .args(["--config", file.path().to_str().unwrap()])
        .args(["hmac", "secret"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("webhook.secret_length"));
}

#[test]
fn hmac_webhook_headers() {
    let timestamp = "Tue, 05 Mar 2024 08:12:31 GMT";
    beanlink()
        .args(["hmac", "webhook", "--body", BODY, "--secret", SECRET])
        .args(["--timestamp", timestamp])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "X-Signature: {}\nDate: {timestamp}\n",
            sign_hmac_sha256(BODY, SECRET)
        )));
}

#[test]
fn hmac_check_webhook_outcomes() {
    let sig = sign_hmac_sha256(BODY, SECRET);
    let now = format_http_date(chrono::Utc::now());

    beanlink()
        .args(["hmac", "check-webhook", "--signature", sig.as_str(), "--date", now.as_str()])
        .args(["--body", BODY, "--secret", SECRET])
        .assert()
        .success()
        .stdout(predicate::str::contains("Webhook accepted"));

    beanlink()
        .args(["hmac", "check-webhook", "--signature", sig.as_str()])
        .args(["--date", "Mon, 01 Jan 2024 00:00:00 GMT"])
        .args(["--body", BODY, "--secret", SECRET])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Stale"));

    beanlink()
        .args(["hmac", "check-webhook", "--date", now.as_str()])
        .args(["--body", BODY, "--secret", SECRET])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("X-Signature"));
}

#[test]
fn hmac_skew() {
    let now = format_http_date(chrono::Utc::now());
    beanlink().args(["hmac", "skew", now.as_str()]).assert().success();
    beanlink()
        .args(["hmac", "skew", "Mon, 01 Jan 2024 00:00:00 GMT", "--max-skew", "300"])
        .assert()
        .code(5);
}
