//! Validation of Digital Link paths and GTINs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::try_parse_digital_link;

static GTIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,14}$").expect("valid regex"));

/// Returns true if `gtin` is 8 to 14 ASCII digits.
pub fn is_valid_gtin(gtin: &str) -> bool {
    GTIN_PATTERN.is_match(gtin)
}

/// Returns true if `pathname` carries a well-formed GTIN and no empty lot or
/// serial value.
///
/// Never fails: undecodable input is simply invalid.
///
/// # Example
/// ```
/// use beanlink_digital_link::is_valid_digital_link;
///
/// assert!(is_valid_digital_link("/01/09506000134352"));
/// assert!(!is_valid_digital_link("/01/123"));
/// assert!(!is_valid_digital_link("/10/L2305"));
/// ```
pub fn is_valid_digital_link(pathname: &str) -> bool {
    match try_parse_digital_link(pathname) {
        Ok(keys) => !keys.gtin.is_empty() && keys.is_valid(),
        Err(err) => {
            tracing::debug!(error = %err, "Digital Link failed validation");
            false
        }
    }
}

/// Checks the GS1 mod-10 check digit of a well-formed GTIN.
///
/// Returns false for anything that is not 8 to 14 digits.
pub fn gtin_check_digit_is_valid(gtin: &str) -> bool {
    if !is_valid_gtin(gtin) {
        return false;
    }

    let digits: Vec<u32> = gtin.bytes().map(|b| u32::from(b - b'0')).collect();
    let Some((&check, body)) = digits.split_last() else {
        return false;
    };

    // Weights alternate 3,1,3,... starting from the digit next to the check digit.
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();

    (10 - sum % 10) % 10 == check
}
