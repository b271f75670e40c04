//! # timetable-rust
//!
//! Weekly class-schedule resolution engine.
//!
//! Given a timestamp, this crate decides which of two alternating weekly
//! timetables (the "odd"/"even" academic week) is active, maps the wall-clock
//! time onto a lesson slot, and answers the queries a chat front end needs:
//! today's schedule, tomorrow's schedule, the lesson in progress, the next
//! lesson, and the room the students are currently in.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Public types consumed by callers (answer DTOs, newtypes)
//! - [`models`]: Domain values — time-of-day, slot table, week variant, schedule documents
//! - [`store`]: Schedule document loading (file-backed, cached, in-memory)
//! - [`services`]: The resolver that composes slot table, week selector and store
//! - [`config`]: Environment-driven configuration for document locations
//!
//! Message delivery and text rendering are deliberately out of scope: a
//! presentation layer calls into [`services::resolver::ScheduleResolver`] with
//! a timestamp and renders the structured answer itself.
//!
//! All resolver operations take the current instant as an explicit parameter,
//! so every query is a deterministic function of (timestamp, documents) and
//! can be tested with injected fixed timestamps.

pub mod api;

pub mod config;

pub mod models;

pub mod services;

pub mod store;
