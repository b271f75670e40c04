//! Wall-clock time values and the lesson slot table.

use crate::api::LessonNumber;
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wall-clock time of day (no date, no time zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a new time of day. Ranges are validated when a
    /// [`SlotTable`] is built from intervals.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Extract the wall-clock time from a chrono timestamp.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }

    fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A lesson time interval, start strictly before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error raised when a slot table fails validation.
#[derive(Debug, thiserror::Error)]
pub enum SlotTableError {
    #[error("slot table must contain at least one interval")]
    Empty,
    #[error("interval {index} contains an out-of-range time: {interval}")]
    InvalidTime { index: usize, interval: TimeInterval },
    #[error("interval {index} must start before it ends: {interval}")]
    EmptyInterval { index: usize, interval: TimeInterval },
    #[error("interval {index} starts before the previous interval ends: {interval}")]
    Overlapping { index: usize, interval: TimeInterval },
}

/// Where a wall-clock time falls relative to the slot table.
///
/// The two sentinels (`BeforeClasses`, `AfterClasses`) and the explicit
/// `Break` variant make every time of day resolvable — there is no
/// undefined "between intervals" branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotIndex {
    /// Strictly before the first interval starts. Ordinal 0.
    BeforeClasses,
    /// Inside the 1-based numbered interval.
    Lesson(LessonNumber),
    /// In the gap after interval `after`, before the next one starts.
    Break { after: LessonNumber },
    /// At or after the last interval's end. Ordinal N+1.
    AfterClasses,
}

impl SlotIndex {
    /// The matched lesson number, if the time falls inside an interval.
    pub fn lesson_number(&self) -> Option<LessonNumber> {
        match self {
            SlotIndex::Lesson(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric position used for "next lesson" comparisons:
    /// 0 before classes, the slot number during a lesson, the last finished
    /// slot number during a break, and `slot_count + 1` after classes.
    pub fn ordinal(&self, slot_count: u16) -> u16 {
        match self {
            SlotIndex::BeforeClasses => 0,
            SlotIndex::Lesson(n) => n.value(),
            SlotIndex::Break { after } => after.value(),
            SlotIndex::AfterClasses => slot_count + 1,
        }
    }
}

/// The ordered, non-overlapping list of daily lesson intervals.
///
/// Built once at startup and never mutated; gaps between intervals are
/// allowed, contiguity is not required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotTable(Vec<TimeInterval>);

impl SlotTable {
    /// Build a slot table, validating time ranges, interval direction and
    /// interval ordering.
    pub fn new(intervals: Vec<TimeInterval>) -> Result<Self, SlotTableError> {
        if intervals.is_empty() {
            return Err(SlotTableError::Empty);
        }
        let mut previous_end: Option<u16> = None;
        for (index, interval) in intervals.iter().enumerate() {
            if !interval.start.is_valid() || !interval.end.is_valid() {
                return Err(SlotTableError::InvalidTime {
                    index,
                    interval: *interval,
                });
            }
            let start = interval.start.minutes_from_midnight();
            let end = interval.end.minutes_from_midnight();
            if start >= end {
                return Err(SlotTableError::EmptyInterval {
                    index,
                    interval: *interval,
                });
            }
            if let Some(prev) = previous_end {
                if start < prev {
                    return Err(SlotTableError::Overlapping {
                        index,
                        interval: *interval,
                    });
                }
            }
            previous_end = Some(end);
        }
        Ok(Self(intervals))
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.0
    }

    /// Number of slots (lesson numbers run 1..=len).
    pub fn len(&self) -> u16 {
        self.0.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a wall-clock time to its position in the table.
    ///
    /// A time equal to an interval's start belongs to that interval; a time
    /// equal to an interval's end does not (`start <= t < end`). A time at or
    /// past the last interval's end is after classes.
    pub fn slot_at(&self, t: TimeOfDay) -> SlotIndex {
        let now = t.minutes_from_midnight();
        let (first, last) = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => (first, last),
            // Unreachable: construction rejects empty tables.
            _ => return SlotIndex::BeforeClasses,
        };
        if now < first.start.minutes_from_midnight() {
            return SlotIndex::BeforeClasses;
        }
        if now >= last.end.minutes_from_midnight() {
            return SlotIndex::AfterClasses;
        }
        for (i, interval) in self.0.iter().enumerate() {
            let start = interval.start.minutes_from_midnight();
            let end = interval.end.minutes_from_midnight();
            if now >= start && now < end {
                return SlotIndex::Lesson(LessonNumber(i as u16 + 1));
            }
            if now < start {
                // Gap between interval i-1 and i.
                return SlotIndex::Break {
                    after: LessonNumber(i as u16),
                };
            }
        }
        SlotIndex::AfterClasses
    }

    /// Convenience: the numeric position of `t` (see [`SlotIndex::ordinal`]).
    pub fn ordinal_at(&self, t: TimeOfDay) -> u16 {
        self.slot_at(t).ordinal(self.len())
    }
}

impl Default for SlotTable {
    /// The standard five-pair school day. The boundaries are a configuration
    /// constant, not derived from anything.
    fn default() -> Self {
        Self(vec![
            TimeInterval::new(TimeOfDay::new(8, 0), TimeOfDay::new(9, 50)),
            TimeInterval::new(TimeOfDay::new(9, 50), TimeOfDay::new(11, 30)),
            TimeInterval::new(TimeOfDay::new(11, 30), TimeOfDay::new(13, 20)),
            TimeInterval::new(TimeOfDay::new(13, 20), TimeOfDay::new(15, 0)),
            TimeInterval::new(TimeOfDay::new(15, 0), TimeOfDay::new(16, 30)),
        ])
    }
}
