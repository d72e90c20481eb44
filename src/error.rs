use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = RosterError> = std::result::Result<T, E>;

/// Errors surfaced by the roster library.
///
/// Load failures are not listed here: an unreadable or corrupt data file is
/// recovered by starting from an empty structure.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize roster data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No records for sport '{sport}' and age category '{age_category}'")]
    BucketNotFound { sport: String, age_category: String },

    #[error("Invalid index {index}: bucket holds {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
