//! Lease date parsing and ISO-8601 formatting
//!
//! Dates arrive as whatever the client form produced: `<input type="date">`
//! values, full timestamps, US-style dates or epoch milliseconds. They are
//! normalized to an instant in epoch milliseconds and printed in the fixed
//! `YYYY-MM-DDTHH:mm:ss.sssZ` form.
//!
//! Timestamps without an offset are read as UTC so that the output never
//! depends on the server's local time zone.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde_json::Value;

use crate::coerce::to_display_string;

/// Largest representable distance from the epoch: 100,000,000 days
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a client value into epoch milliseconds
///
/// Numbers are taken as epoch milliseconds, booleans as 0 or 1 ms, strings
/// are parsed, arrays are parsed through their display string. Returns
/// `None` for anything that does not name a valid instant.
pub fn parse_date(value: &Value) -> Option<i64> {
    match value {
        Value::Null => clip_time(0.0),
        Value::Bool(b) => clip_time(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => clip_time(n.as_f64()?),
        Value::String(s) => parse_date_str(s),
        Value::Array(_) | Value::Object(_) => parse_date_str(&to_display_string(value)),
    }
}

/// Parse a date string into epoch milliseconds
pub fn parse_date_str(input: &str) -> Option<i64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let millis = parse_with_offset(s)
        .or_else(|| parse_naive_datetime(s))
        .or_else(|| parse_iso_date(s))
        .or_else(|| parse_naive_date(s))
        .or_else(|| parse_partial_date(s))
        .or_else(|| {
            DateTime::parse_from_rfc2822(s)
                .ok()
                .map(|dt| dt.timestamp_millis())
        })?;

    in_range(millis)
}

fn parse_with_offset(s: &str) -> Option<i64> {
    let normalized = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };

    OFFSET_FORMATS.iter().find_map(|fmt| {
        DateTime::parse_from_str(&normalized, fmt)
            .ok()
            .map(|dt| dt.timestamp_millis())
    })
}

fn parse_naive_datetime(s: &str) -> Option<i64> {
    NAIVE_DATETIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt)
            .ok()
            .map(|dt| dt.and_utc().timestamp_millis())
    })
}

/// `YYYY-MM-DD` where any day from 1 to 31 is accepted and days past the
/// end of the month carry into the next one (`2024-02-30` is March 1st)
fn parse_iso_date(s: &str) -> Option<i64> {
    let mut parts = s.splitn(3, '-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    let digits = |part: &str, len: usize| {
        part.len() == len && part.chars().all(|c| c.is_ascii_digit())
    };
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn parse_naive_date(s: &str) -> Option<i64> {
    NAIVE_DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp_millis())
    })
}

/// `YYYY` and `YYYY-MM`, both at the start of the period in UTC
fn parse_partial_date(s: &str) -> Option<i64> {
    let (year, month) = match s.split_once('-') {
        Some((y, m)) if y.len() == 4 && m.len() == 2 => (y, m),
        None if s.len() == 4 => (s, "01"),
        _ => return None,
    };
    if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Truncate a millisecond count toward zero and reject out-of-range values
fn clip_time(millis: f64) -> Option<i64> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS as f64 {
        return None;
    }
    Some(millis.trunc() as i64)
}

fn in_range(millis: i64) -> Option<i64> {
    (millis.abs() <= MAX_EPOCH_MILLIS).then_some(millis)
}

/// Format epoch milliseconds as `YYYY-MM-DDTHH:mm:ss.sssZ`
///
/// Years outside `0..=9999` use the expanded six-digit signed form.
pub fn format_iso(millis: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(in_range(millis)?)?;

    let year = dt.year();
    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else if year < 0 {
        format!("-{:06}", -year)
    } else {
        format!("+{:06}", year)
    };

    Some(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.timestamp_subsec_millis()
    ))
}

/// Parse a client value and print it in ISO-8601 form
pub fn normalize_date(value: &Value) -> Option<String> {
    parse_date(value).and_then(format_iso)
}
