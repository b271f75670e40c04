//! Public API surface for the schedule engine.
//!
//! This file consolidates the types a caller (the presentation layer) works
//! with. All types derive Serialize/Deserialize for JSON serialization where
//! it makes sense.

pub use crate::models::schedule::{Day, Lesson, LessonKind, WeekSchedule};
pub use crate::models::time::{SlotIndex, SlotTable, SlotTableError, TimeInterval, TimeOfDay};
pub use crate::models::week::WeekVariant;
pub use crate::services::resolver::{NextLessonAnswer, ScheduleResolver, TomorrowSchedule};
pub use crate::store::error::{StoreError, StoreResult};
pub use crate::store::{CachedScheduleStore, FileScheduleStore, InMemoryScheduleStore, ScheduleStore};

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based lesson slot number, referencing the slot table.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LessonNumber(pub u16);

impl LessonNumber {
    pub fn new(value: u16) -> Self {
        LessonNumber(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
