//! Show start time parsing and display formatting
//!
//! Start times are stored as text. Everything written by the create handler
//! goes through [`normalize_start_time`], so stored values sort
//! lexicographically in temporal order. Older rows may hold other layouts;
//! [`parse_start_time`] accepts the common ones.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Storage layout for show start times
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a stored or submitted start time
///
/// Offsets in RFC 3339 values are converted to local time so they compare
/// against [`now`]. A bare date means midnight.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a submitted start time and re-encode it in [`STORAGE_FORMAT`]
pub fn normalize_start_time(value: &str) -> Option<String> {
    parse_start_time(value).map(|dt| dt.format(STORAGE_FORMAT).to_string())
}

/// Display formats used by the pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// "Saturday May, 21, 2019 at 9:30PM"
    Full,
    /// "Sat 05, 21, 2019 9:30PM"
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Format a start time for display; unparseable input is returned verbatim
pub fn format_datetime(value: &str, format: DateFormat) -> String {
    match parse_start_time(value) {
        Some(dt) => dt.format(format.pattern()).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_storage_format() {
        let dt = parse_start_time("2019-05-21 21:30:00").unwrap();
        assert_eq!(dt.format(STORAGE_FORMAT).to_string(), "2019-05-21 21:30:00");
    }

    #[test]
    fn test_parse_iso_t_separator() {
        let dt = parse_start_time("2035-04-01T20:00:00").unwrap();
        assert_eq!(dt.hour(), 20);
    }

    #[test]
    fn test_parse_without_seconds() {
        let dt = parse_start_time("2035-04-01 20:15").unwrap();
        assert_eq!(dt.minute(), 15);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_start_time("2019-06-15T23:00:00.000").is_some());
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_start_time("2035-04-01").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        assert!(parse_start_time("2019-05-21T21:30:00.000Z").is_some());
        assert!(parse_start_time("2019-05-21T21:30:00+02:00").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_start_time("").is_none());
        assert!(parse_start_time("   ").is_none());
        assert!(parse_start_time("next tuesday").is_none());
        assert!(parse_start_time("2019-13-45 10:00:00").is_none());
    }

    #[test]
    fn test_normalize_sorts_lexicographically() {
        let a = normalize_start_time("2035-01-02T09:00").unwrap();
        let b = normalize_start_time("2035-01-10 08:00:00").unwrap();
        assert_eq!(a, "2035-01-02 09:00:00");
        assert!(a < b);
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_datetime("2019-05-21 21:30:00", DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn test_format_medium() {
        assert_eq!(
            format_datetime("2019-05-21 21:30:00", DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn test_format_unparseable_passthrough() {
        assert_eq!(format_datetime("soon", DateFormat::Full), "soon");
    }

    #[test]
    fn test_now_is_recent() {
        let year = now().format("%Y").to_string().parse::<i32>().unwrap();
        assert!(year >= 2024);
    }
}
