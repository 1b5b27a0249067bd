//! Timestamp parsing for interaction records and date filters

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Integer epochs at or above this value are read as milliseconds
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

const DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a record timestamp
///
/// Accepts RFC 3339, common `date time` layouts, bare dates (midnight), and
/// integer epochs in seconds or milliseconds. Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return parse_epoch(raw);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse the lower bound of a date range
pub fn parse_range_start(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw)
}

/// Parse the upper bound of a date range
///
/// A bare date covers the whole day, so `2024-01-31` admits records up to
/// `2024-01-31T23:59:59.999`.
pub fn parse_range_end(raw: &str) -> Option<NaiveDateTime> {
    match parse_date(raw.trim()) {
        Some(day) => day.and_hms_milli_opt(23, 59, 59, 999),
        None => parse_timestamp(raw),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_epoch(raw: &str) -> Option<NaiveDateTime> {
    let value: i64 = raw.parse().ok()?;
    let dt = if value >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(value)?
    } else {
        DateTime::from_timestamp(value, 0)?
    };
    Some(dt.naive_utc())
}
