// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON document store: one file holding every user record.

use super::{StoreError, UserMap, UserStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Store backed by a single JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// original, so a crash mid-write leaves the previous snapshot intact.
/// Only one process may own the file; there is no cross-process locking.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty store file if none exists.
    ///
    /// Returns `true` when a new file was written. `load` never does this
    /// on its own: a missing file there is an error.
    pub fn ensure_exists(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        self.save(&UserMap::new())?;
        tracing::info!(path = %self.path.display(), "Created empty data file");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl UserStore for JsonFileStore {
    fn load(&self) -> Result<UserMap, StoreError> {
        let data = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::Missing(self.path.clone()),
            _ => StoreError::Io(e.to_string()),
        })?;

        serde_json::from_str(&data).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to parse data file");
            StoreError::Corrupt(e.to_string())
        })
    }

    fn save(&self, users: &UserMap) -> Result<(), StoreError> {
        let data =
            serde_json::to_string_pretty(users).map_err(|e| StoreError::Io(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, data).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), users = users.len(), "Saved data file");
        Ok(())
    }
}
