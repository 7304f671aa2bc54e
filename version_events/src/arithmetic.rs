/// Version Events v1 — Date Arithmetic
///
/// Proleptic Gregorian dates only (`chrono::NaiveDate`). No time of day,
/// no time zone, no wall clock.
///
/// All day additions are checked: leaving the representable range is an
/// error, never a wrap or a panic.

use chrono::{NaiveDate, TimeDelta};

use crate::error::ProjectionError;

/// Wire format of every date entering or leaving the kernel.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// Shape is checked before chrono sees the input, so forms chrono would
/// tolerate (`2025-11-4`, `+2025-11-04`, surrounding whitespace) are
/// rejected rather than silently normalised.
pub fn parse_date(input: &str) -> Result<NaiveDate, ProjectionError> {
    let invalid = || ProjectionError::InvalidDate {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Checked signed day addition.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, ProjectionError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| ProjectionError::DateOverflow {
            date: format_date(date),
            days,
        })
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
