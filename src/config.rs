//! Schedule store configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

use crate::store::FileScheduleStore;

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory containing the two week schedule documents.
    pub dir: PathBuf,
    /// File name of the odd-week (variant A) document.
    pub odd_file: String,
    /// File name of the even-week (variant B) document.
    pub even_file: String,
}

impl StoreConfig {
    /// Create a new store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `TIMETABLE_DIR` (required): directory holding the schedule documents
    /// - `TIMETABLE_ODD_FILE` (optional, default: `lessons_odd.json`)
    /// - `TIMETABLE_EVEN_FILE` (optional, default: `lessons_even.json`)
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("TIMETABLE_DIR")
            .map_err(|_| "TIMETABLE_DIR environment variable not set".to_string())?;
        let odd_file = env::var("TIMETABLE_ODD_FILE")
            .unwrap_or_else(|_| FileScheduleStore::DEFAULT_ODD_FILE.to_string());
        let even_file = env::var("TIMETABLE_EVEN_FILE")
            .unwrap_or_else(|_| FileScheduleStore::DEFAULT_EVEN_FILE.to_string());

        Ok(Self {
            dir: PathBuf::from(dir),
            odd_file,
            even_file,
        })
    }

    /// Configuration pointing at a directory with the default file names.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            odd_file: FileScheduleStore::DEFAULT_ODD_FILE.to_string(),
            even_file: FileScheduleStore::DEFAULT_EVEN_FILE.to_string(),
        }
    }
}
