//! Request timestamp parsing and clock-skew checks.

use chrono::{DateTime, NaiveDate, Utc};

/// Default tolerated difference between a request's `Date` and our clock.
pub const DEFAULT_MAX_SKEW_SECONDS: u64 = 300;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a time as an HTTP-date, e.g. `Tue, 15 Nov 1994 08:12:31 GMT`.
pub fn format_http_date(at: DateTime<Utc>) -> String {
    at.format(HTTP_DATE_FORMAT).to_string()
}

/// Parse a request timestamp.
///
/// Accepts HTTP-dates and other RFC 2822 forms, RFC 3339, and bare
/// `YYYY-MM-DD` dates (taken as UTC midnight).
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Check that `request_date` is within `max_skew_seconds` of the current time.
///
/// Both past and future timestamps count. Unparseable dates return `false`.
pub fn validate_clock_skew(request_date: &str, max_skew_seconds: u64) -> bool {
    validate_clock_skew_at(request_date, max_skew_seconds, Utc::now())
}

/// [`validate_clock_skew`] against an explicit reference time.
pub fn validate_clock_skew_at(request_date: &str, max_skew_seconds: u64, now: DateTime<Utc>) -> bool {
    let Some(requested) = parse_http_date(request_date) else {
        tracing::debug!(request_date, "Unparseable request date");
        return false;
    };

    let skew_ms = (now - requested).num_milliseconds().abs();
    let limit_ms = i64::try_from(max_skew_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);

    if skew_ms > limit_ms {
        tracing::debug!(skew_ms, limit_ms, "Request date outside allowed skew");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 8, 12, 31).unwrap()
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(fixed_now()), "Tue, 05 Mar 2024 08:12:31 GMT");
    }

    #[test]
    fn test_parse_formats() {
        let expected = fixed_now();
        assert_eq!(parse_http_date("Tue, 05 Mar 2024 08:12:31 GMT"), Some(expected));
        assert_eq!(parse_http_date("2024-03-05T08:12:31Z"), Some(expected));
        assert_eq!(parse_http_date("2024-03-05T09:12:31+01:00"), Some(expected));
        assert_eq!(
            parse_http_date("2024-03-05"),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_http_date("yesterday"), None);
        assert_eq!(parse_http_date(""), None);
    }

    #[test]
    fn test_current_time_is_fresh() {
        assert!(validate_clock_skew(&format_http_date(Utc::now()), DEFAULT_MAX_SKEW_SECONDS));
    }

    #[test]
    fn test_old_request_is_stale() {
        let old = Utc::now() - Duration::milliseconds(400_000);
        assert!(!validate_clock_skew(&format_http_date(old), 300));
    }

    #[test]
    fn test_skew_is_symmetric() {
        let now = fixed_now();
        let ahead = format_http_date(now + Duration::seconds(299));
        let behind = format_http_date(now - Duration::seconds(299));
        assert!(validate_clock_skew_at(&ahead, 300, now));
        assert!(validate_clock_skew_at(&behind, 300, now));
        assert!(!validate_clock_skew_at(&format_http_date(now + Duration::seconds(301)), 300, now));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let now = fixed_now();
        let edge = format_http_date(now - Duration::seconds(300));
        assert!(validate_clock_skew_at(&edge, 300, now));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(!validate_clock_skew("not a date", 300));
        assert!(!validate_clock_skew_at("not a date", u64::MAX, fixed_now()));
    }
}
