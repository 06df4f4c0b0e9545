//! Timestamp helpers used across the postpulse workspace

use crate::{PulseError, Result, Timestamp};
use chrono::{Duration, DurationRound, NaiveDate};

/// Accepted layouts for `time_base` values, tried in order. A value matching
/// none of them is a fatal error for the run.
const TIMESTAMP_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a `time_base` string into a [`Timestamp`].
///
/// Bare dates parse to midnight of that day.
pub fn parse_timestamp(value: &str) -> Result<Timestamp> {
    let trimmed = value.trim();
    for layout in TIMESTAMP_LAYOUTS {
        if let Ok(ts) = Timestamp::parse_from_str(trimmed, layout) {
            return Ok(ts);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    Err(PulseError::timestamp(value))
}

/// Format a timestamp the way the output tables expect it
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Truncate a timestamp down to the start of its hour
pub fn floor_hour(ts: Timestamp) -> Timestamp {
    ts.duration_trunc(Duration::hours(1)).unwrap_or(ts)
}

/// Round a timestamp up to the next hour boundary. A timestamp already on
/// the boundary stays put.
pub fn ceil_hour(ts: Timestamp) -> Timestamp {
    let floored = floor_hour(ts);
    if floored == ts {
        ts
    } else {
        floored + Duration::hours(1)
    }
}

/// Truncate a timestamp down to the start of its day
pub fn floor_day(ts: Timestamp) -> Timestamp {
    ts.duration_trunc(Duration::days(1)).unwrap_or(ts)
}

/// Round a timestamp up to the next midnight. Midnight itself stays put.
pub fn ceil_day(ts: Timestamp) -> Timestamp {
    let floored = floor_day(ts);
    if floored == ts {
        ts
    } else {
        floored + Duration::days(1)
    }
}

/// Every hour instant from `start` to `end` inclusive, stepping one hour.
/// Callers are expected to pass hour-aligned bounds.
pub fn hour_sequence(start: Timestamp, end: Timestamp) -> Vec<Timestamp> {
    let mut instants = Vec::new();
    let mut current = start;
    while current <= end {
        instants.push(current);
        current += Duration::hours(1);
    }
    instants
}
