//! Reading identifier keys back out of Digital Link paths and URLs.

use url::Url;

use crate::{ApplicationIdentifier, DigitalLinkError, DigitalLinkKeys, Result};

/// Parses a Digital Link path into keys.
///
/// Empty segments are skipped, so leading, trailing and doubled slashes are
/// tolerated. Segments pair up strictly by position as `AI/value`; an odd
/// trailing AI is dropped and unknown AIs are ignored. A missing GTIN comes
/// back as an empty string, missing lot/serial as `None`.
///
/// If any value fails to percent-decode the all-empty sentinel is returned.
/// Use [`try_parse_digital_link`] to see why.
pub fn parse_digital_link(pathname: &str) -> DigitalLinkKeys {
    try_parse_digital_link(pathname).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Digital Link path rejected");
        DigitalLinkKeys::default()
    })
}

/// Parses a Digital Link path, reporting undecodable values as errors.
pub fn try_parse_digital_link(pathname: &str) -> Result<DigitalLinkKeys> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let mut keys = DigitalLinkKeys::default();

    for pair in segments.chunks_exact(2) {
        let [ai, raw] = pair else { continue };
        let Some(known) = ApplicationIdentifier::from_code(ai) else {
            continue;
        };

        let value = urlencoding::decode(raw)
            .map_err(|_| DigitalLinkError::MalformedValue {
                ai: (*ai).to_string(),
                segment: (*raw).to_string(),
            })?
            .into_owned();

        match known {
            ApplicationIdentifier::Gtin => keys.gtin = value,
            ApplicationIdentifier::Lot => keys.lot = Some(value),
            ApplicationIdentifier::Serial => keys.serial = Some(value),
        }
    }

    Ok(keys)
}

/// Extracts keys from an absolute Digital Link URL.
///
/// The query string and fragment are ignored.
///
/// # Errors
/// [`DigitalLinkError::InvalidUrl`] if `url` is not an absolute URL.
pub fn extract_digital_link_from_url(url: &str) -> Result<DigitalLinkKeys> {
    let parsed = Url::parse(url).map_err(|e| {
        tracing::debug!(error = %e, "Digital Link URL rejected");
        DigitalLinkError::InvalidUrl
    })?;
    Ok(parse_digital_link(parsed.path()))
}
