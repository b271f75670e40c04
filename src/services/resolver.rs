//! Schedule resolution queries.
//!
//! Composes the week selector, schedule store and slot table to answer the
//! queries used by the presentation layer: schedule for a weekday (today /
//! tomorrow / arbitrary), current lesson, next lesson, and room occupancy.
//!
//! All operations are pure reads over the loaded documents; the timestamp is
//! always an explicit parameter so a fixed instant can be injected in tests.

use crate::models::schedule::{Day, Lesson, WeekSchedule};
use crate::models::time::{SlotIndex, SlotTable, TimeOfDay};
use crate::models::week::{normalized_weekday, WeekVariant, MONDAY, SATURDAY, SUNDAY, WEEKDAY_COUNT};
use crate::store::error::StoreResult;
use crate::store::ScheduleStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Answer to the "schedule for tomorrow" query.
///
/// When advancing from Friday lands on Saturday, the weekend notice is set
/// and Monday's schedule is substituted. Advancing from Saturday onto Sunday
/// substitutes Monday silently — the asymmetry is deliberate and preserved
/// from the original behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TomorrowSchedule {
    pub day: Day,
    /// True when tomorrow is a weekend day and Monday was substituted with a
    /// "weekend — no class" notice.
    pub weekend_notice: bool,
}

/// Answer to the "next lesson" query.
///
/// Carries the resolved current slot position alongside the lesson so the
/// caller can report both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextLessonAnswer {
    pub current: SlotIndex,
    /// First lesson in document order with a slot number past the current
    /// position; `None` when the day has no further lesson.
    pub lesson: Option<Lesson>,
}

/// The central query engine.
///
/// Holds shared ownership of a [`ScheduleStore`] and an immutable
/// [`SlotTable`]; never mutates either.
pub struct ScheduleResolver {
    store: Arc<dyn ScheduleStore>,
    slots: SlotTable,
}

impl ScheduleResolver {
    /// Resolver over `store` with the standard slot table.
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self::with_slot_table(store, SlotTable::default())
    }

    /// Resolver with a custom slot table.
    pub fn with_slot_table(store: Arc<dyn ScheduleStore>, slots: SlotTable) -> Self {
        Self { store, slots }
    }

    pub fn slot_table(&self) -> &SlotTable {
        &self.slots
    }

    /// The full schedule document of the week active at `now`.
    pub fn active_week(&self, now: DateTime<Utc>) -> StoreResult<Arc<WeekSchedule>> {
        let variant = WeekVariant::for_instant(now);
        debug!(%variant, "resolving active week");
        self.store.week(variant)
    }

    /// Monday through Friday of the active week.
    pub fn working_days(&self, now: DateTime<Utc>) -> StoreResult<Vec<Day>> {
        let week = self.active_week(now)?;
        Ok(week.days()[..usize::from(SATURDAY)].to_vec())
    }

    /// Schedule for an arbitrary weekday of the active week.
    /// `weekday` is Monday-first (0 = Monday .. 6 = Sunday); values past 6
    /// wrap.
    pub fn schedule_for_weekday(&self, now: DateTime<Utc>, weekday: u8) -> StoreResult<Day> {
        let week = self.active_week(now)?;
        Ok(week.day(weekday).clone())
    }

    /// Today's schedule.
    pub fn schedule_today(&self, now: DateTime<Utc>) -> StoreResult<Day> {
        self.schedule_for_weekday(now, normalized_weekday(now))
    }

    /// The next school day's schedule.
    ///
    /// Advancing onto Saturday substitutes Monday and raises the weekend
    /// notice; advancing onto Sunday substitutes Monday without the notice.
    pub fn schedule_tomorrow(&self, now: DateTime<Utc>) -> StoreResult<TomorrowSchedule> {
        let week = self.active_week(now)?;
        let mut tomorrow = (normalized_weekday(now) + 1) % WEEKDAY_COUNT;
        let mut weekend_notice = false;
        if tomorrow == SATURDAY {
            warn!("tomorrow falls on the weekend, substituting Monday");
            weekend_notice = true;
            tomorrow = MONDAY;
        } else if tomorrow == SUNDAY {
            tomorrow = MONDAY;
        }
        Ok(TomorrowSchedule {
            day: week.day(tomorrow).clone(),
            weekend_notice,
        })
    }

    /// The lesson in progress at `now`, if any.
    ///
    /// Scans today's lessons in document order for the one whose number
    /// matches the current slot; when the same number appears more than once
    /// the last entry wins, matching the original scan. Sentinel and break
    /// positions match nothing.
    pub fn current_lesson(&self, now: DateTime<Utc>) -> StoreResult<Option<Lesson>> {
        let day = self.schedule_today(now)?;
        let slot = self.slots.slot_at(TimeOfDay::from_datetime(now));
        let Some(number) = slot.lesson_number() else {
            debug!(?slot, "no lesson in progress");
            return Ok(None);
        };
        let mut found = None;
        for lesson in &day.lessons {
            if lesson.number == number {
                found = Some(lesson.clone());
            }
        }
        Ok(found)
    }

    /// The first lesson after the current slot position.
    ///
    /// The day's lesson list is scanned in document order and is never
    /// sorted: if the document is not pre-sorted by number, the first listed
    /// match is the answer.
    pub fn next_lesson(&self, now: DateTime<Utc>) -> StoreResult<NextLessonAnswer> {
        let day = self.schedule_today(now)?;
        let slot = self.slots.slot_at(TimeOfDay::from_datetime(now));
        let current = slot.ordinal(self.slots.len());
        let lesson = day
            .lessons
            .iter()
            .find(|lesson| lesson.number.value() > current)
            .cloned();
        debug!(?slot, found = lesson.is_some(), "next lesson scan");
        Ok(NextLessonAnswer {
            current: slot,
            lesson,
        })
    }

    /// Room of the lesson in progress ("where are the students"), if any.
    pub fn current_room(&self, now: DateTime<Utc>) -> StoreResult<Option<String>> {
        Ok(self.current_lesson(now)?.map(|lesson| lesson.room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LessonNumber;
    use crate::models::schedule::{Lesson, LessonKind};
    use crate::store::InMemoryScheduleStore;
    use chrono::TimeZone;

    fn lesson(name: &str, number: u16, room: &str) -> Lesson {
        Lesson {
            name: name.to_string(),
            teacher: "T. Teacher".to_string(),
            room: room.to_string(),
            comment: String::new(),
            number: LessonNumber(number),
            kind: LessonKind::Lecture,
        }
    }

    fn week(label: &str, monday_lessons: Vec<Lesson>) -> WeekSchedule {
        let names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let days = names
            .iter()
            .enumerate()
            .map(|(i, name)| Day {
                name: format!("{label} {name}"),
                lessons: if i == 0 {
                    monday_lessons.clone()
                } else {
                    vec![]
                },
            })
            .collect();
        WeekSchedule::from_days(days).unwrap()
    }

    fn resolver(monday_lessons: Vec<Lesson>) -> ScheduleResolver {
        let store = InMemoryScheduleStore::new(
            week("odd", monday_lessons.clone()),
            week("even", monday_lessons),
        );
        ScheduleResolver::new(Arc::new(store))
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    // 2024-01-15 is a Monday in ISO week 3 (odd); 2024-01-22 is a Monday in
    // ISO week 4 (even).
    const ODD_MONDAY: (i32, u32, u32) = (2024, 1, 15);
    const EVEN_MONDAY: (i32, u32, u32) = (2024, 1, 22);

    #[test]
    fn test_week_parity_selects_variant() {
        let store = InMemoryScheduleStore::new(week("odd", vec![]), week("even", vec![]));
        let resolver = ScheduleResolver::new(Arc::new(store));

        let (y, m, d) = ODD_MONDAY;
        let day = resolver.schedule_today(utc(y, m, d, 10, 0)).unwrap();
        assert_eq!(day.name, "odd Mon");

        let (y, m, d) = EVEN_MONDAY;
        let day = resolver.schedule_today(utc(y, m, d, 10, 0)).unwrap();
        assert_eq!(day.name, "even Mon");
    }

    #[test]
    fn test_schedule_for_weekday_returns_stored_day() {
        let resolver = resolver(vec![lesson("Analysis", 1, "301")]);
        let (y, m, d) = ODD_MONDAY;
        let now = utc(y, m, d, 12, 0);
        for index in 0u8..7 {
            let day = resolver.schedule_for_weekday(now, index).unwrap();
            assert!(day.name.starts_with("odd"));
        }
        let monday = resolver.schedule_for_weekday(now, 0).unwrap();
        assert_eq!(monday.lessons.len(), 1);
        assert_eq!(monday.lessons[0].name, "Analysis");
    }

    #[test]
    fn test_current_lesson_matches_slot_number() {
        let resolver = resolver(vec![lesson("Analysis", 1, "301"), lesson("Physics", 2, "214")]);
        let (y, m, d) = ODD_MONDAY;
        let found = resolver.current_lesson(utc(y, m, d, 10, 15)).unwrap();
        assert_eq!(found.map(|l| l.name), Some("Physics".to_string()));
    }

    #[test]
    fn test_current_lesson_none_when_slot_unfilled() {
        // 10:15 is slot 2; the day only has lessons 1 and 3.
        let resolver = resolver(vec![lesson("Analysis", 1, "301"), lesson("Networks", 3, "301")]);
        let (y, m, d) = ODD_MONDAY;
        let found = resolver.current_lesson(utc(y, m, d, 10, 15)).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_current_lesson_none_before_classes() {
        let resolver = resolver(vec![lesson("Analysis", 1, "301")]);
        let (y, m, d) = ODD_MONDAY;
        assert!(resolver.current_lesson(utc(y, m, d, 7, 0)).unwrap().is_none());
        assert!(resolver.current_room(utc(y, m, d, 7, 0)).unwrap().is_none());
    }

    #[test]
    fn test_current_lesson_duplicate_numbers_last_wins() {
        let resolver = resolver(vec![
            lesson("First entry", 2, "101"),
            lesson("Second entry", 2, "202"),
        ]);
        let (y, m, d) = ODD_MONDAY;
        let found = resolver.current_lesson(utc(y, m, d, 10, 15)).unwrap();
        assert_eq!(found.map(|l| l.room), Some("202".to_string()));
    }

    #[test]
    fn test_next_lesson_skips_to_first_greater_number() {
        // 10:15 -> slot 2; lessons 1 and 3 -> next is number 3, room 301.
        let resolver = resolver(vec![lesson("Analysis", 1, "301"), lesson("Networks", 3, "301")]);
        let (y, m, d) = ODD_MONDAY;
        let answer = resolver.next_lesson(utc(y, m, d, 10, 15)).unwrap();
        assert_eq!(answer.current, SlotIndex::Lesson(LessonNumber(2)));
        let next = answer.lesson.expect("should find lesson 3");
        assert_eq!(next.number, LessonNumber(3));
        assert_eq!(next.room, "301");
    }

    #[test]
    fn test_next_lesson_respects_document_order() {
        // Unsorted document: the first listed match wins, not the smallest
        // number.
        let resolver = resolver(vec![
            lesson("Listed first", 5, "501"),
            lesson("Listed second", 3, "303"),
        ]);
        let (y, m, d) = ODD_MONDAY;
        let answer = resolver.next_lesson(utc(y, m, d, 8, 30)).unwrap();
        assert_eq!(answer.lesson.map(|l| l.room), Some("501".to_string()));
    }

    #[test]
    fn test_next_lesson_none_after_last() {
        let resolver = resolver(vec![lesson("Analysis", 1, "301")]);
        let (y, m, d) = ODD_MONDAY;
        let answer = resolver.next_lesson(utc(y, m, d, 15, 30)).unwrap();
        assert!(answer.lesson.is_none());
    }

    #[test]
    fn test_next_lesson_never_returns_current_or_earlier() {
        let resolver = resolver(vec![
            lesson("One", 1, "101"),
            lesson("Two", 2, "102"),
            lesson("Three", 3, "103"),
        ]);
        let (y, m, d) = ODD_MONDAY;
        // During slot 2, the scan must not return lesson 1 or 2.
        let answer = resolver.next_lesson(utc(y, m, d, 10, 15)).unwrap();
        assert_eq!(answer.lesson.map(|l| l.number), Some(LessonNumber(3)));
    }

    #[test]
    fn test_current_room_reports_room() {
        let resolver = resolver(vec![lesson("Physics", 2, "214")]);
        let (y, m, d) = ODD_MONDAY;
        let room = resolver.current_room(utc(y, m, d, 10, 15)).unwrap();
        assert_eq!(room, Some("214".to_string()));
    }

    #[test]
    fn test_tomorrow_plain_weekday() {
        let resolver = resolver(vec![]);
        let (y, m, d) = ODD_MONDAY;
        let answer = resolver.schedule_tomorrow(utc(y, m, d, 12, 0)).unwrap();
        assert_eq!(answer.day.name, "odd Tue");
        assert!(!answer.weekend_notice);
    }

    #[test]
    fn test_tomorrow_from_friday_raises_weekend_notice() {
        let resolver = resolver(vec![]);
        // 2024-01-19 is the Friday of ISO week 3.
        let answer = resolver.schedule_tomorrow(utc(2024, 1, 19, 12, 0)).unwrap();
        assert_eq!(answer.day.name, "odd Mon");
        assert!(answer.weekend_notice);
    }

    #[test]
    fn test_tomorrow_from_saturday_substitutes_silently() {
        let resolver = resolver(vec![]);
        // 2024-01-20 is the Saturday of ISO week 3.
        let answer = resolver.schedule_tomorrow(utc(2024, 1, 20, 12, 0)).unwrap();
        assert_eq!(answer.day.name, "odd Mon");
        assert!(!answer.weekend_notice);
    }

    #[test]
    fn test_tomorrow_from_sunday_is_monday() {
        let resolver = resolver(vec![]);
        // 2024-01-21 is the Sunday of ISO week 3.
        let answer = resolver.schedule_tomorrow(utc(2024, 1, 21, 12, 0)).unwrap();
        assert_eq!(answer.day.name, "odd Mon");
        assert!(!answer.weekend_notice);
    }

    #[test]
    fn test_working_days_are_monday_to_friday() {
        let resolver = resolver(vec![]);
        let (y, m, d) = ODD_MONDAY;
        let days = resolver.working_days(utc(y, m, d, 12, 0)).unwrap();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].name, "odd Mon");
        assert_eq!(days[4].name, "odd Fri");
    }
}
