//! Week-variant selection and weekday normalization.
//!
//! The active timetable alternates with ISO-8601 calendar week parity; the
//! variant is recomputed from the instant on every query, never stored.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in a week schedule document.
pub const WEEKDAY_COUNT: u8 = 7;

/// Monday-first index of Saturday.
pub const SATURDAY: u8 = 5;

/// Monday-first index of Sunday.
pub const SUNDAY: u8 = 6;

/// Monday-first index of Monday.
pub const MONDAY: u8 = 0;

/// One of the two alternating weekly timetables.
///
/// Variant `A` is active on odd ISO weeks, variant `B` on even ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekVariant {
    A,
    B,
}

impl WeekVariant {
    /// Derive the active variant from a UTC instant via its ISO week number.
    pub fn for_instant(t: DateTime<Utc>) -> Self {
        if t.iso_week().week() % 2 == 1 {
            WeekVariant::A
        } else {
            WeekVariant::B
        }
    }

    /// The other variant.
    pub fn other(self) -> Self {
        match self {
            WeekVariant::A => WeekVariant::B,
            WeekVariant::B => WeekVariant::A,
        }
    }
}

impl fmt::Display for WeekVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekVariant::A => write!(f, "A"),
            WeekVariant::B => write!(f, "B"),
        }
    }
}

/// Monday-first weekday index of an instant: 0 = Monday .. 6 = Sunday.
///
/// This is the normalization used everywhere a weekday feeds into a
/// [`crate::models::schedule::WeekSchedule`] lookup.
pub fn normalized_weekday(t: DateTime<Utc>) -> u8 {
    t.weekday().num_days_from_monday() as u8
}
