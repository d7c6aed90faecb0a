//! Edit engine: applies one editing intent to a buffer and cursor.
//!
//! [`apply`] is a pure function so it can be driven without any terminal.

use super::segment::{Cursor, Segment};
use super::TimestampBuffer;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

/// Everything a key press can ask of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    StepLeft,
    StepRight,
    NextSegment,
    PrevSegment,
    /// Add one unit of the segment under the cursor
    Increment,
    /// Subtract one unit of the segment under the cursor
    Decrement,
    /// Overwrite the digit under the cursor
    Digit(u8),
}

/// Result of [`apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub cursor: Cursor,
    /// New buffer contents, present only when the text changed
    pub buffer: Option<TimestampBuffer>,
}

impl EditOutcome {
    fn moved(cursor: Cursor) -> Self {
        Self { cursor, buffer: None }
    }

    pub fn changed(&self) -> bool {
        self.buffer.is_some()
    }
}

/// Apply `intent` at `cursor` to `buffer`
pub fn apply(intent: EditIntent, cursor: Cursor, buffer: &TimestampBuffer) -> EditOutcome {
    match intent {
        EditIntent::StepLeft => EditOutcome::moved(cursor.step_left()),
        EditIntent::StepRight => EditOutcome::moved(cursor.step_right()),
        EditIntent::NextSegment => EditOutcome::moved(cursor.next_segment()),
        EditIntent::PrevSegment => EditOutcome::moved(cursor.prev_segment()),
        EditIntent::Increment => adjust(cursor, buffer, 1),
        EditIntent::Decrement => adjust(cursor, buffer, -1),
        EditIntent::Digit(digit) if cursor.accepts(digit) => EditOutcome {
            cursor: cursor.step_right(),
            buffer: Some(buffer.with_digit(cursor, digit)),
        },
        EditIntent::Digit(_) => EditOutcome::moved(cursor),
    }
}

/// Shift the parsed time by `delta` units of the segment under the cursor.
///
/// No-op when the buffer does not parse or the result leaves the four digit year range.
fn adjust(cursor: Cursor, buffer: &TimestampBuffer, delta: i32) -> EditOutcome {
    let shifted = buffer
        .parse()
        .ok()
        .and_then(|time| shift(time, cursor.segment(), delta))
        .and_then(|time| TimestampBuffer::from_time(&time).ok());

    EditOutcome {
        cursor,
        buffer: shifted,
    }
}

/// Calendar arithmetic for date segments, fixed durations for time of day
pub fn shift(time: DateTime<Utc>, segment: Segment, delta: i32) -> Option<DateTime<Utc>> {
    match segment {
        Segment::Year => shift_months(time, delta.checked_mul(12)?),
        Segment::Month => shift_months(time, delta),
        Segment::Day => {
            let days = Days::new(u64::from(delta.unsigned_abs()));
            if delta >= 0 {
                time.checked_add_days(days)
            } else {
                time.checked_sub_days(days)
            }
        }
        Segment::Hour => time.checked_add_signed(Duration::hours(i64::from(delta))),
        Segment::Minute => time.checked_add_signed(Duration::minutes(i64::from(delta))),
        Segment::Second => time.checked_add_signed(Duration::seconds(i64::from(delta))),
    }
}

/// Move by whole months, letting an overflowing day spill into the next month.
///
/// Jan 31 plus one month is Mar 3 (Mar 2 in a leap year), not the end of February.
fn shift_months(time: DateTime<Utc>, delta: i32) -> Option<DateTime<Utc>> {
    let date = time.date_naive();
    let months = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(delta);
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let shifted = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(date.day0())))?;
    Some(shifted.and_time(time.time()).and_utc())
}
