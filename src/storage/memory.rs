// ABOUTME: In-memory storage backend over a shared hash map
// ABOUTME: Used by tests and as a scratch backend with no persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use liftlog_core::errors::AppResult;

use super::{StorageBackend, StorageKey};

/// In-memory storage backend
///
/// Documents live in a `HashMap` behind `Arc<RwLock<..>>` so clones share
/// the same contents. Nothing survives the process; this backend exists
/// for tests and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: Arc<RwLock<HashMap<&'static str, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    async fn get<T: DeserializeOwned + Send>(&self, key: StorageKey) -> AppResult<Option<T>> {
        let documents = self.documents.read().await;
        match documents.get(key.as_str()) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec(value)?;
        debug!(key = %key, bytes = bytes.len(), "storing document in memory");
        self.documents.write().await.insert(key.as_str(), bytes);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> AppResult<()> {
        self.documents.write().await.remove(key.as_str());
        Ok(())
    }
}
