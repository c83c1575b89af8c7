use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts carrying their own offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
];

/// Layouts without an offset, read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
];

/// Parse a free-form feed date into epoch seconds.
pub fn parse_published(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.timestamp());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// Timestamp used for ordering; unparseable dates sort as oldest
pub fn timestamp_or_zero(raw: &str) -> i64 {
    parse_published(raw).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc2822_with_numeric_offset() {
        assert_eq!(
            parse_published("Thu, 28 Dec 2023 00:00:00 +0000"),
            Some(1703721600)
        );
    }

    #[test]
    fn test_rfc2822_with_zone_name() {
        assert_eq!(
            parse_published("Thu, 28 Dec 2023 00:00:00 GMT"),
            Some(1703721600)
        );
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(parse_published("2024-01-15T12:00:00Z"), Some(1705320000));
        assert_eq!(
            parse_published("2024-03-01T09:30:00+02:00"),
            Some(1709278200)
        );
    }

    #[test]
    fn test_naive_values_are_utc() {
        assert_eq!(parse_published("2024-01-15 12:00:00"), Some(1705320000));
        assert_eq!(parse_published("2024-03-01"), Some(1709251200));
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_published("yesterday-ish"), None);
        assert_eq!(timestamp_or_zero("not a date"), 0);
        assert_eq!(timestamp_or_zero(""), 0);
    }
}
