// ABOUTME: JSON file storage backend, one document per key
// ABOUTME: Default on-device persistence under the platform data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use liftlog_core::errors::AppResult;

use super::{StorageBackend, StorageKey};

/// File-based storage backend
///
/// Each key maps to one pretty-printed JSON file under the data directory
/// (`<dir>/gym_workouts.json`, `<dir>/food_entries.json`). Writes replace
/// the whole file, matching the store's whole-collection persistence model.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform-default data directory (`<data_dir>/liftlog`), falling back
    /// to the current directory when the platform reports none
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from("."), |base| base.join("liftlog"))
    }

    /// The directory this backend writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl StorageBackend for JsonFileStorage {
    async fn get<T: DeserializeOwned + Send>(&self, key: StorageKey) -> AppResult<Option<T>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        debug!(path = %path.display(), bytes = bytes.len(), "writing document");
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> AppResult<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
