//! Service layer: the schedule resolver.
//!
//! The resolver composes the week selector, the schedule store and the slot
//! table into the query functions a presentation layer calls. Every
//! operation takes the current instant as an explicit parameter.

pub mod resolver;

pub use resolver::{NextLessonAnswer, ScheduleResolver, TomorrowSchedule};
