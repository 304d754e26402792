//! Building Digital Link URLs from identifier keys.

use crate::{ApplicationIdentifier, DigitalLinkKeys};

/// Resolver base used when the caller does not supply one.
pub const DEFAULT_BASE: &str = "https://id.example.com";

/// Query parameters appended to every full Digital Link.
const LINK_QUERY: [(&str, &str); 2] = [("linkType", "product"), ("ctx", "mobile")];

/// Builds a GS1 Digital Link URL.
///
/// The path is `/01/<gtin>`, followed by `/10/<lot>` and `/21/<serial>` when
/// those keys are present and non-empty. Values are percent-encoded as URI
/// components. The GTIN is not validated.
///
/// A lot or serial of exactly `.` or `..` is emitted as-is. URL parsers treat
/// it as a dot-segment (`%2E` included), so [`extract_digital_link_from_url`]
/// will not recover it. [`parse_digital_link`] on the raw path still does.
///
/// [`extract_digital_link_from_url`]: crate::extract_digital_link_from_url
/// [`parse_digital_link`]: crate::parse_digital_link
///
/// # Example
/// ```
/// use beanlink_digital_link::{build_digital_link, DigitalLinkKeys, DEFAULT_BASE};
///
/// let keys = DigitalLinkKeys::new("09506000134352").with_lot("L2305");
/// assert_eq!(
///     build_digital_link(&keys, DEFAULT_BASE),
///     "https://id.example.com/01/09506000134352/10/L2305?linkType=product&ctx=mobile"
/// );
/// ```
pub fn build_digital_link(keys: &DigitalLinkKeys, base: &str) -> String {
    let path = build_path(keys, |value| urlencoding::encode(value).into_owned());

    let query = LINK_QUERY
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}{path}?{query}")
}

/// Builds a compact Digital Link for dense QR payloads.
///
/// Any `https://` prefix on `base` is replaced by a fixed `https://` scheme,
/// no query string is added and values are inserted verbatim. Callers must
/// pass values that are already URL-safe.
pub fn build_qr_friendly_digital_link(keys: &DigitalLinkKeys, base: &str) -> String {
    let host = base.strip_prefix("https://").unwrap_or(base);
    let path = build_path(keys, str::to_owned);
    format!("https://{host}{path}")
}

fn build_path(keys: &DigitalLinkKeys, encode: impl Fn(&str) -> String) -> String {
    let mut segments = vec![ApplicationIdentifier::Gtin.code().to_string(), encode(&keys.gtin)];

    if let Some(lot) = keys.lot() {
        segments.push(ApplicationIdentifier::Lot.code().to_string());
        segments.push(encode(lot));
    }
    if let Some(serial) = keys.serial() {
        segments.push(ApplicationIdentifier::Serial.code().to_string());
        segments.push(encode(serial));
    }

    format!("/{}", segments.join("/"))
}
