// ============================================================================
// Week Schedule Documents
// ============================================================================
//
// The two weekly timetables are consumed as JSON documents: an array of
// exactly 7 day records (Monday first), each with a display name and a list
// of lessons carrying a 1-based slot number and an integer lesson-kind code.
// The documents are produced by an external tool with PascalCase keys;
// lowercase keys are accepted as aliases.

use crate::api::LessonNumber;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a lesson, decoded from the document's integer code:
/// 0 = lecture, 1 = practice, anything else = unknown.
///
/// The catch-all third category is part of the document contract and must
/// survive round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i8", into = "i8")]
pub enum LessonKind {
    Lecture,
    Practice,
    Unknown,
}

impl From<i8> for LessonKind {
    fn from(code: i8) -> Self {
        match code {
            0 => LessonKind::Lecture,
            1 => LessonKind::Practice,
            _ => LessonKind::Unknown,
        }
    }
}

impl From<LessonKind> for i8 {
    fn from(kind: LessonKind) -> Self {
        match kind {
            LessonKind::Lecture => 0,
            LessonKind::Practice => 1,
            LessonKind::Unknown => -1,
        }
    }
}

impl Default for LessonKind {
    fn default() -> Self {
        LessonKind::Unknown
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonKind::Lecture => write!(f, "lecture"),
            LessonKind::Practice => write!(f, "practice"),
            LessonKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// One lesson entry of a day. `number` references the slot table; it is the
/// lookup key, the position in the day's list carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lesson {
    #[serde(default, alias = "name")]
    pub name: String,
    #[serde(default, alias = "teacher")]
    pub teacher: String,
    #[serde(default, alias = "room")]
    pub room: String,
    #[serde(default, alias = "comment")]
    pub comment: String,
    #[serde(alias = "number")]
    pub number: LessonNumber,
    #[serde(rename = "Type", alias = "type", default)]
    pub kind: LessonKind,
}

/// One weekday: a display label plus the lessons in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Day {
    #[serde(default, alias = "name")]
    pub name: String,
    #[serde(default, alias = "lessons")]
    pub lessons: Vec<Lesson>,
}

/// A full week of days, Monday (index 0) through Sunday (index 6).
///
/// Always exactly 7 entries; construction and parsing enforce the length, so
/// lookups by normalized weekday index are total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSchedule([Day; 7]);

impl WeekSchedule {
    pub const DAYS: usize = 7;

    /// Build from a Monday-first list of exactly 7 days.
    pub fn from_days(days: Vec<Day>) -> Result<Self> {
        let count = days.len();
        let days: [Day; 7] = days.try_into().map_err(|_| {
            anyhow::anyhow!(
                "week schedule must contain exactly {} days, got {}",
                Self::DAYS,
                count
            )
        })?;
        Ok(Self(days))
    }

    /// The day at a normalized weekday index. Indices are taken modulo 7 so
    /// the lookup is total for any advanced/wrapped index.
    pub fn day(&self, index: u8) -> &Day {
        &self.0[usize::from(index) % Self::DAYS]
    }

    pub fn days(&self) -> &[Day] {
        &self.0
    }
}

/// Parse a week schedule document from a JSON string.
///
/// The document is an array of 7 day records. Shape violations (not an
/// array, bad field types, wrong day count) are reported as errors; the
/// caller maps them onto its own error type.
pub fn parse_week_json_str(json: &str) -> Result<WeekSchedule> {
    let days: Vec<Day> =
        serde_json::from_str(json).context("failed to deserialize week schedule JSON")?;
    WeekSchedule::from_days(days)
}

/// Hex-encoded SHA-256 of a document, used to identify loaded documents in
/// logs.
pub fn document_checksum(json: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// Tests
// ============================================================================
