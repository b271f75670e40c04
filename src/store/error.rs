//! Error types for schedule store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for schedule document loading.
///
/// An empty query result ("no lesson in progress") is not an error and is
/// modeled as `Option::None` by the resolver; these variants cover genuine
/// failures only. A failed load is terminal for the query — there is no
/// fallback to the other variant's document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be read from the underlying source.
    #[error("schedule document unavailable: {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but could not be parsed into a week schedule.
    #[error("schedule document malformed: {}: {message}", path.display())]
    DataMalformed { path: PathBuf, message: String },
}

impl StoreError {
    /// The document path involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::DataUnavailable { path, .. } => path,
            StoreError::DataMalformed { path, .. } => path,
        }
    }
}
