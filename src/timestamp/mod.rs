//! Fixed-width UTC timestamp model.
//!
//! The editor works on a single 20 character buffer shaped like
//! `2006-01-02T15:04:05Z`. Only digit positions are ever rewritten, so the
//! buffer keeps its layout no matter how many edits are applied, even when
//! the digits no longer form a valid date.
//!
//! # Module Components
//!
//! - [`segment`] - The segment table and the [`Cursor`] moving over it
//! - [`edit`] - The pure edit engine mapping an [`EditIntent`] onto the buffer

pub mod edit;
pub mod segment;

pub use edit::{apply, EditIntent, EditOutcome};
pub use segment::{Cursor, Segment};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt;
use thiserror::Error;

/// Layout of the editable timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Number of characters in a formatted timestamp
pub const TIMESTAMP_LEN: usize = 20;

/// Shape of the buffer: `0` marks a digit position, anything else is a separator
const LAYOUT: &[u8; TIMESTAMP_LEN] = b"0000-00-00T00:00:00Z";

/// Years that still format into exactly four digits
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// The buffer does not hold a valid timestamp.
///
/// This is an expected state while the user is in the middle of an edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing time \"{input}\": {reason}")]
pub struct TimestampError {
    pub input: String,
    pub reason: String,
}

impl TimestampError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Format a time into the fixed editable layout.
///
/// Sub-second precision is dropped.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse text in the fixed editable layout
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    if input.len() != TIMESTAMP_LEN {
        return Err(TimestampError::new(input, "expected YYYY-MM-DDTHH:MM:SSZ"));
    }

    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| TimestampError::new(input, diagnose(input).map_or_else(|| e.to_string(), str::to_string)))
}

/// Name the first field that makes `input` an invalid timestamp
fn diagnose(input: &str) -> Option<&'static str> {
    let field = |segment: Segment| -> Option<u32> {
        input.get(segment.start()..=segment.end())?.parse().ok()
    };

    let year = i32::try_from(field(Segment::Year)?).ok()?;
    let month = field(Segment::Month)?;
    let day = field(Segment::Day)?;

    if !(1..=12).contains(&month) {
        return Some("month out of range");
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Some("day out of range");
    }
    if field(Segment::Hour)? > 23 {
        return Some("hour out of range");
    }
    if field(Segment::Minute)? > 59 {
        return Some("minute out of range");
    }
    if field(Segment::Second)? > 59 {
        return Some("second out of range");
    }
    None
}

/// The editable timestamp text.
///
/// Always exactly [`TIMESTAMP_LEN`] ASCII characters with the separators
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampBuffer {
    text: String,
}

impl TimestampBuffer {
    /// Create a buffer holding `time`.
    ///
    /// Fails when the year does not fit in four digits.
    pub fn from_time(time: &DateTime<Utc>) -> Result<Self, TimestampError> {
        let text = format_timestamp(time);
        if !YEAR_RANGE.contains(&time.year()) {
            return Err(TimestampError::new(&text, "year out of range"));
        }
        Ok(Self { text })
    }

    /// Create a buffer from text already in the editable layout.
    ///
    /// The text does not need to be a valid date, only to have digits
    /// wherever a digit belongs and the separators everywhere else.
    pub fn from_text(text: &str) -> Result<Self, TimestampError> {
        let well_formed = text.len() == TIMESTAMP_LEN
            && text.bytes().zip(LAYOUT.iter().copied()).enumerate().all(|(offset, (got, want))| {
                if Cursor::at(offset).is_some() {
                    got.is_ascii_digit()
                } else {
                    got == want
                }
            });

        if !well_formed {
            return Err(TimestampError::new(text, "expected YYYY-MM-DDTHH:MM:SSZ"));
        }
        Ok(Self { text: text.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parse the current text
    pub fn parse(&self) -> Result<DateTime<Utc>, TimestampError> {
        parse_timestamp(&self.text)
    }

    /// Copy of this buffer with the digit under `cursor` replaced.
    ///
    /// Values above 9 leave the copy unchanged.
    pub fn with_digit(&self, cursor: Cursor, digit: u8) -> Self {
        let mut text = self.text.clone();
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            let offset = cursor.offset();
            text.replace_range(offset..offset + 1, c.encode_utf8(&mut [0; 4]));
        }
        Self { text }
    }
}

impl fmt::Display for TimestampBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Drop anything below whole seconds, matching what the buffer can hold
pub fn truncate_to_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    time.with_nanosecond(0).unwrap_or(time)
}
