//! Schedule document storage.
//!
//! The two weekly timetable documents are consumed, not owned, by this crate:
//! a [`ScheduleStore`] resolves a [`WeekVariant`] to its parsed, validated
//! [`WeekSchedule`]. One parameterized loader serves both variants — the
//! odd/even documents differ only in their file name.
//!
//! Implementations:
//!
//! - [`FileScheduleStore`]: reads the JSON documents from a directory on
//!   every call.
//! - [`CachedScheduleStore`]: wraps another store and keeps each variant's
//!   document resident after the first load, populated through a single
//!   race-safe path.
//! - [`InMemoryScheduleStore`]: fixed documents, for tests and local
//!   development.

pub mod error;

use crate::config::StoreConfig;
use crate::models::schedule::{document_checksum, parse_week_json_str, WeekSchedule};
use crate::models::week::WeekVariant;
use error::{StoreError, StoreResult};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Resolves a week variant to its full-week schedule document.
///
/// Loads are pure reads; implementations must be shareable across threads.
pub trait ScheduleStore: Send + Sync {
    /// Load the schedule document for `variant`.
    fn week(&self, variant: WeekVariant) -> StoreResult<Arc<WeekSchedule>>;
}

fn variant_slot(variant: WeekVariant) -> usize {
    match variant {
        WeekVariant::A => 0,
        WeekVariant::B => 1,
    }
}

/// File-backed schedule store.
///
/// Variant `A` maps to the odd-week document, variant `B` to the even-week
/// document. Every call re-reads the file; wrap in a
/// [`CachedScheduleStore`] to keep documents resident.
pub struct FileScheduleStore {
    dir: PathBuf,
    odd_file: String,
    even_file: String,
}

impl FileScheduleStore {
    /// Default document file names inside the configured directory.
    pub const DEFAULT_ODD_FILE: &'static str = "lessons_odd.json";
    pub const DEFAULT_EVEN_FILE: &'static str = "lessons_even.json";

    /// Store reading `lessons_odd.json` / `lessons_even.json` from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            odd_file: Self::DEFAULT_ODD_FILE.to_string(),
            even_file: Self::DEFAULT_EVEN_FILE.to_string(),
        }
    }

    /// Override the per-variant document file names.
    pub fn with_file_names(
        mut self,
        odd_file: impl Into<String>,
        even_file: impl Into<String>,
    ) -> Self {
        self.odd_file = odd_file.into();
        self.even_file = even_file.into();
        self
    }

    /// Build a store from environment-driven configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.dir).with_file_names(&config.odd_file, &config.even_file)
    }

    /// Path of the document backing `variant`.
    pub fn document_path(&self, variant: WeekVariant) -> PathBuf {
        let file = match variant {
            WeekVariant::A => &self.odd_file,
            WeekVariant::B => &self.even_file,
        };
        self.dir.join(file)
    }
}

fn load_document(path: &Path, variant: WeekVariant) -> StoreResult<WeekSchedule> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let week = parse_week_json_str(&raw).map_err(|e| StoreError::DataMalformed {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    })?;
    info!(
        %variant,
        path = %path.display(),
        checksum = %document_checksum(&raw),
        days = week.days().len(),
        "loaded week schedule document"
    );
    Ok(week)
}

impl ScheduleStore for FileScheduleStore {
    fn week(&self, variant: WeekVariant) -> StoreResult<Arc<WeekSchedule>> {
        let path = self.document_path(variant);
        Ok(Arc::new(load_document(&path, variant)?))
    }
}

/// Read-through cache over another store.
///
/// Each variant's document is loaded at most once and then served from
/// memory. Population goes through a write lock with a re-check, so
/// concurrent first access cannot double-load.
pub struct CachedScheduleStore<S> {
    inner: S,
    cache: RwLock<[Option<Arc<WeekSchedule>>; 2]>,
}

impl<S: ScheduleStore> CachedScheduleStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new([None, None]),
        }
    }

    /// Drop both cached documents; the next access reloads from the inner
    /// store.
    pub fn invalidate(&self) {
        *self.cache.write() = [None, None];
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ScheduleStore> ScheduleStore for CachedScheduleStore<S> {
    fn week(&self, variant: WeekVariant) -> StoreResult<Arc<WeekSchedule>> {
        let slot = variant_slot(variant);
        if let Some(week) = self.cache.read()[slot].clone() {
            return Ok(week);
        }
        let mut cache = self.cache.write();
        // Re-check: another thread may have populated while we waited.
        if let Some(week) = cache[slot].clone() {
            return Ok(week);
        }
        let week = self.inner.week(variant)?;
        cache[slot] = Some(Arc::clone(&week));
        Ok(week)
    }
}

/// Fixed in-memory documents, for unit tests and local development.
pub struct InMemoryScheduleStore {
    weeks: [Arc<WeekSchedule>; 2],
}

impl InMemoryScheduleStore {
    pub fn new(week_a: WeekSchedule, week_b: WeekSchedule) -> Self {
        Self {
            weeks: [Arc::new(week_a), Arc::new(week_b)],
        }
    }

    /// Serve the same document for both variants.
    pub fn uniform(week: WeekSchedule) -> Self {
        let week = Arc::new(week);
        Self {
            weeks: [Arc::clone(&week), week],
        }
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn week(&self, variant: WeekVariant) -> StoreResult<Arc<WeekSchedule>> {
        Ok(Arc::clone(&self.weeks[variant_slot(variant)]))
    }
}
