// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Display formatting for capture timestamps

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// What malformed timestamps render as
pub const INVALID_DATE: &str = "Invalid Date";

/// `1/15/2024, 10:30:00 AM`
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Offset-less date-times, as the capture service writes them
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Minute-precision date-times with an offset; RFC 3339 covers the rest
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Render an ISO-8601 timestamp in the host's local time zone.
///
/// Never fails: input that cannot be read as a timestamp yields
/// [`INVALID_DATE`].
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, &Local)
}

/// [`format_date`] against an explicit time zone
pub fn format_date_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match parse_timestamp_in(iso, tz) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Interpret an ISO-8601 string as an instant in `tz`.
///
/// Offset-carrying input is an absolute instant. Date-times without an
/// offset are wall-clock time in `tz`. Date-only forms (`2024-01-15`,
/// `2024-01`, `2024`) are midnight UTC on the first day they name.
pub fn parse_timestamp_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let s = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }

    let with_offset = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(tz));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(wall_clock_in(tz, &naive));
        }
    }

    let date = parse_date_only(s)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Wall-clock time in `tz`. Ambiguous times take the earlier instant; times
/// skipped by a forward transition move forward by an hour.
fn wall_clock_in<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return dt;
    }

    tz.from_local_datetime(&(*naive + Duration::hours(1)))
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(naive))
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let padded = match s.len() {
        4 => format!("{}-01-01", s),
        7 => format!("{}-01", s),
        10 => s.to_string(),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}
