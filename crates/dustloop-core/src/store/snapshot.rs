// ── On-disk snapshot ──
//
// A single JSON file holding the last successful export verbatim.
// Writes go to a sibling temp file first and are renamed into place, so a
// crash mid-write never leaves a truncated snapshot behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::CoreError;
use crate::model::MoveRecord;

/// The snapshot file backing a [`DataStore`](super::DataStore).
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `Ok(None)` when no snapshot has been written yet.
    pub async fn load(&self) -> Result<Option<Vec<MoveRecord>>, CoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        let records: Vec<MoveRecord> =
            serde_json::from_slice(&bytes).map_err(|e| CoreError::SnapshotFormat {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %self.path.display(), records = records.len(), "snapshot loaded");
        Ok(Some(records))
    }

    /// Overwrite the snapshot with `records`.
    pub async fn save(&self, records: &[MoveRecord]) -> Result<(), CoreError> {
        let json = serde_json::to_vec(records).map_err(|e| CoreError::SnapshotFormat {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &json)
            .await
            .map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), bytes = json.len(), "snapshot written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::SnapshotIo {
            path: self.path.clone(),
            source,
        }
    }
}
