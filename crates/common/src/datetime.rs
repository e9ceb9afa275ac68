//! Calendar and clock parsing helpers.
//!
//! Answers arrive as free text typed into a browser form. Every parser here is
//! total: unparseable input yields `None` and never panics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Milliseconds in one calendar day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse a calendar date (optionally with a time) anchored to UTC.
///
/// Supported forms:
/// - `2024-05-01` (midnight)
/// - RFC 3339: `2024-05-01T10:30:00Z`, `2024-05-01T10:30:00+02:00`
/// - naive date-times: `2024-05-01T10:30[:00]`, `2024-05-01 10:30[:00]`
///
/// Naive values are read as UTC so two dates typed in different time zones
/// still compare as calendar days.
///
/// # Examples
///
/// ```
/// use babybet_common::datetime::parse_calendar_date;
///
/// let date = parse_calendar_date("2024-05-01").unwrap();
/// assert_eq!(date.to_string(), "2024-05-01 00:00:00");
/// assert!(parse_calendar_date("next tuesday").is_none());
/// ```
pub fn parse_calendar_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Whole days between two instants, rounded to the nearest day.
///
/// # Examples
///
/// ```
/// use babybet_common::datetime::{days_between, parse_calendar_date};
///
/// let a = parse_calendar_date("2024-05-01").unwrap();
/// let b = parse_calendar_date("2024-05-03").unwrap();
/// assert_eq!(days_between(&a, &b), 2.0);
/// ```
pub fn days_between(a: &NaiveDateTime, b: &NaiveDateTime) -> f64 {
    let millis = (*b - *a).num_milliseconds().unsigned_abs() as f64;
    (millis / MILLIS_PER_DAY).round()
}

/// Parse an `HH:MM` clock time into minutes since midnight.
///
/// Only the first two `:`-separated components are read. Each must be a
/// finite decimal or blank, and a blank component counts as 0. Values are not
/// range-checked; `25:00` is 1500 minutes.
///
/// # Examples
///
/// ```
/// use babybet_common::datetime::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("23:50"), Some(1430.0));
/// assert_eq!(parse_clock_minutes("07:05:59"), Some(425.0));
/// assert_eq!(parse_clock_minutes("10:"), Some(600.0));
/// assert_eq!(parse_clock_minutes("noon"), None);
/// ```
pub fn parse_clock_minutes(input: &str) -> Option<f64> {
    let mut parts = input.split(':');
    let hours = parse_component(parts.next()?)?;
    let minutes = parse_component(parts.next()?)?;
    Some(hours * 60.0 + minutes)
}

fn parse_component(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0.0);
    }
    let value: f64 = part.parse().ok()?;
    value.is_finite().then_some(value)
}
