//! JSON-on-disk snapshot slot.
//!
//! The collection is encoded as one JSON document under a fixed file name
//! inside the configured directory, mirroring a single key-value slot.

use crate::{Result as StorageErrorResult, SNAPSHOT_FILE_NAME, SnapshotStore, StorageError};

use tb_core::Project;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Snapshot slot inside `dir`; the directory is created on first save
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_FILE_NAME),
        }
    }

    /// Full path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Vec<Project> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read snapshot {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(projects) => projects,
            Err(e) => {
                warn!(
                    "Corrupt snapshot {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, projects: &[Project]) -> StorageErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let encoded = serde_json::to_string_pretty(projects).map_err(StorageError::encode)?;

        fs::write(&self.path, encoded).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(
            "Saved {} project(s) to {}",
            projects.len(),
            self.path.display()
        );

        Ok(())
    }
}
