use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::config;
use crate::error::{Result, RosterError};
use crate::models::SportsData;

/// Handle to the JSON file holding all roster data.
///
/// No file is held open between calls: `load` and `save` each open, fully
/// read or write, and close.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location (env override or platform data dir).
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(config::resolve_data_path(None)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted structure.
    ///
    /// A missing, unreadable or unparsable file yields an empty structure.
    /// The file itself is left alone until the next `save`.
    pub fn load(&self) -> SportsData {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                return SportsData::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                return SportsData::new();
            }
        };

        match serde_json::from_str::<SportsData>(&content) {
            Ok(data) => {
                tracing::debug!("Loaded {} sport(s) from {}", data.len(), self.path.display());
                data
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                SportsData::new()
            }
        }
    }

    /// Replace the file with the full structure.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so the data file is never left half-written.
    pub fn save(&self, data: &SportsData) -> Result<()> {
        let json = to_json(data)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| RosterError::io(&parent, e))?;

        let mut tmp =
            NamedTempFile::new_in(&parent).map_err(|e| RosterError::io(&parent, e))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| RosterError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| RosterError::io(&self.path, e.error))?;

        tracing::debug!("Saved roster to {}", self.path.display());
        Ok(())
    }
}

/// Pretty JSON with 4-space indentation.
fn to_json(data: &SportsData) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)?;
    Ok(buf)
}
