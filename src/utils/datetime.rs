//! Date and time utility functions
//!
//! This module turns the free-form time given on the command line into the
//! starting value of the editor.

use crate::timestamp::{truncate_to_seconds, YEAR_RANGE};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Date-only input format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts accepted on the command line, all read as UTC
const DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

#[derive(Debug, Error)]
pub enum TimeInputError {
    #[error("could not parse time {0:?}")]
    Unrecognized(String),

    #[error("time {0:?} is outside the supported range (years 0000-9999)")]
    OutOfRange(String),

    #[error("invalid duration in {input:?}: {source}")]
    Duration {
        input: String,
        #[source]
        source: humantime::DurationError,
    },
}

/// Parse a free-form starting time.
///
/// # Arguments
/// * `input` - Text such as `now`, `tomorrow`, `2024-01-15T10:30:00+02:00`,
///   `2024-01-15 10:30`, `@1700000000`, `in 2h` or `90min ago`
/// * `now` - Reference point for relative forms
///
/// # Returns
/// * `Result<DateTime<Utc>, TimeInputError>` - The time truncated to whole seconds
pub fn parse_time_input(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, TimeInputError> {
    let text = input.trim().to_lowercase();

    let parsed = match text.as_str() {
        "" => return Err(TimeInputError::Unrecognized(input.to_string())),
        "now" => Some(now),
        "today" => midnight(now.date_naive()),
        "tomorrow" => now.date_naive().succ_opt().and_then(midnight),
        "yesterday" => now.date_naive().pred_opt().and_then(midnight),
        _ => None,
    };

    let parsed = match parsed {
        Some(time) => time,
        None => parse_relative(input, &text, now)?
            .or_else(|| parse_absolute(input.trim()))
            .or_else(|| parse_epoch(&text))
            .ok_or_else(|| TimeInputError::Unrecognized(input.to_string()))?,
    };

    if !YEAR_RANGE.contains(&parsed.year()) {
        return Err(TimeInputError::OutOfRange(input.to_string()));
    }
    Ok(truncate_to_seconds(parsed))
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive))
}

/// `in <duration>` or `<duration> ago`
fn parse_relative(input: &str, text: &str, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>, TimeInputError> {
    let (span, sign) = if let Some(rest) = text.strip_prefix("in ") {
        (rest, 1)
    } else if let Some(rest) = text.strip_suffix(" ago") {
        (rest, -1)
    } else {
        return Ok(None);
    };

    let duration = humantime::parse_duration(span.trim()).map_err(|source| TimeInputError::Duration {
        input: input.to_string(),
        source,
    })?;
    let delta =
        chrono::Duration::from_std(duration).map_err(|_| TimeInputError::OutOfRange(input.to_string()))?;

    let shifted = if sign > 0 {
        now.checked_add_signed(delta)
    } else {
        now.checked_sub_signed(delta)
    };
    shifted
        .map(Some)
        .ok_or_else(|| TimeInputError::OutOfRange(input.to_string()))
}

fn parse_absolute(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(midnight)
        })
}

/// UNIX seconds, optionally written as `@seconds`
fn parse_epoch(text: &str) -> Option<DateTime<Utc>> {
    let digits = text.strip_prefix('@').unwrap_or(text);
    let seconds: i64 = digits.parse().ok()?;
    Utc.timestamp_opt(seconds, 0).single()
}
