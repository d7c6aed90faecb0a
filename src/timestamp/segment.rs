//! Segment table and cursor navigation.
//!
//! Every position rule of the editor (stepping, segment jumps, which digits
//! a position accepts) is derived from [`SEGMENT_TABLE`].

use std::ops::RangeInclusive;

/// One numeric component of the timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Layout of a single segment within the buffer
#[derive(Debug, Clone, Copy)]
pub struct SegmentSpan {
    pub segment: Segment,
    /// Offset of the first digit
    pub start: usize,
    /// Offset of the last digit
    pub end: usize,
    /// Digits accepted at `start`
    pub leading_min: u8,
    pub leading_max: u8,
}

/// Segments in buffer order. Offsets between spans are separators.
pub const SEGMENT_TABLE: [SegmentSpan; 6] = [
    SegmentSpan { segment: Segment::Year, start: 0, end: 3, leading_min: 0, leading_max: 9 },
    SegmentSpan { segment: Segment::Month, start: 5, end: 6, leading_min: 0, leading_max: 1 },
    // Keeps 0 out of the day tens position, so days 01-09 can't be typed there.
    SegmentSpan { segment: Segment::Day, start: 8, end: 9, leading_min: 1, leading_max: 3 },
    SegmentSpan { segment: Segment::Hour, start: 11, end: 12, leading_min: 0, leading_max: 2 },
    SegmentSpan { segment: Segment::Minute, start: 14, end: 15, leading_min: 0, leading_max: 5 },
    SegmentSpan { segment: Segment::Second, start: 17, end: 18, leading_min: 0, leading_max: 5 },
];

impl Segment {
    fn index(self) -> usize {
        self as usize
    }

    fn span(self) -> &'static SegmentSpan {
        &SEGMENT_TABLE[self.index()]
    }

    /// The segment covering `offset`, if it is a digit position
    pub fn containing(offset: usize) -> Option<Segment> {
        SEGMENT_TABLE
            .iter()
            .find(|span| (span.start..=span.end).contains(&offset))
            .map(|span| span.segment)
    }

    pub fn start(self) -> usize {
        self.span().start
    }

    pub fn end(self) -> usize {
        self.span().end
    }

    /// Number of digits in the segment
    pub fn width(self) -> usize {
        self.end() - self.start() + 1
    }

    /// Digits accepted at the leading position
    pub fn leading_digits(self) -> RangeInclusive<u8> {
        let span = self.span();
        span.leading_min..=span.leading_max
    }

    /// Following segment, wrapping from seconds back to year
    pub fn next(self) -> Segment {
        SEGMENT_TABLE[(self.index() + 1) % SEGMENT_TABLE.len()].segment
    }

    /// Preceding segment, wrapping from year to seconds
    pub fn prev(self) -> Segment {
        SEGMENT_TABLE[(self.index() + SEGMENT_TABLE.len() - 1) % SEGMENT_TABLE.len()].segment
    }

    fn is_first(self) -> bool {
        self.index() == 0
    }

    fn is_last(self) -> bool {
        self.index() == SEGMENT_TABLE.len() - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Segment::Year => "year",
            Segment::Month => "month",
            Segment::Day => "day",
            Segment::Hour => "hour",
            Segment::Minute => "minute",
            Segment::Second => "second",
        }
    }
}

/// A position on a digit of the buffer.
///
/// Separators can't be represented, so every transition lands on a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    segment: Segment,
    digit: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            segment: Segment::Year,
            digit: 0,
        }
    }
}

impl Cursor {
    /// Cursor on the first digit of the year
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at `offset`, or `None` for separators and offsets past the last digit
    pub fn at(offset: usize) -> Option<Self> {
        Segment::containing(offset).map(|segment| Self {
            segment,
            digit: offset - segment.start(),
        })
    }

    fn first_of(segment: Segment) -> Self {
        Self { segment, digit: 0 }
    }

    pub fn offset(self) -> usize {
        self.segment.start() + self.digit
    }

    pub fn segment(self) -> Segment {
        self.segment
    }

    /// Whether `digit` may be typed at this position
    pub fn accepts(self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        self.digit != 0 || self.segment.leading_digits().contains(&digit)
    }

    /// Move one digit right, hopping over separators. No-op on the last digit.
    pub fn step_right(self) -> Self {
        if self.digit + 1 < self.segment.width() {
            Self {
                digit: self.digit + 1,
                ..self
            }
        } else if self.segment.is_last() {
            self
        } else {
            Self::first_of(self.segment.next())
        }
    }

    /// Move one digit left, hopping over separators. No-op on the first digit.
    pub fn step_left(self) -> Self {
        if self.digit > 0 {
            Self {
                digit: self.digit - 1,
                ..self
            }
        } else if self.segment.is_first() {
            self
        } else {
            let prev = self.segment.prev();
            Self {
                segment: prev,
                digit: prev.width() - 1,
            }
        }
    }

    /// Jump to the start of the next segment, wrapping around
    pub fn next_segment(self) -> Self {
        Self::first_of(self.segment.next())
    }

    /// Jump to the start of the previous segment, wrapping around
    pub fn prev_segment(self) -> Self {
        Self::first_of(self.segment.prev())
    }
}
