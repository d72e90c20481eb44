//! Data file location.
//!
//! Resolution order, first match wins:
//! - an explicit path (the `--data-file` flag)
//! - `SPORTS_ROSTER_DATA` environment variable
//! - `<platform data dir>/sports-roster/sports_data.json`

use std::path::PathBuf;

use crate::error::{Result, RosterError};

const APP_NAME: &str = "sports-roster";
const DATA_FILE: &str = "sports_data.json";

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "SPORTS_ROSTER_DATA";

/// Resolve the data file path from an optional explicit override.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    default_data_path()
}

fn default_data_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or(RosterError::DataDirUnavailable)?;
    Ok(dirs.data_dir().join(DATA_FILE))
}
