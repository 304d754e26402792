//! Terminal output utilities
//!
//! Human-readable lines go through [`Status`]; `--json` output goes through
//! [`print_json`] so it stays parseable.

use owo_colors::OwoColorize;
use serde::Serialize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print an aligned `label: value` line
    pub fn field(label: &str, value: &str) {
        println!("  {} {}", format!("{:<10}", format!("{label}:")).dimmed(), value);
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render an optional value, using a dash when absent
pub fn or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_string(), str::to_owned)
}

/// Render a pass/fail flag
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("L2305")), "L2305");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }

    #[test]
    fn test_print_json_accepts_serializable() {
        #[derive(Serialize)]
        struct Probe {
            ok: bool,
        }
        assert!(print_json(&Probe { ok: true }).is_ok());
    }
}
