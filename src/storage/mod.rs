// ABOUTME: Pluggable key-value storage for the persisted record collections
// ABOUTME: StorageBackend trait with in-memory and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Storage abstraction.
//!
//! The store persists whole collections as serialized documents under fixed
//! keys; a backend only needs `get`/`set`/`remove`. Backends are pluggable
//! so tests run against [`MemoryStorage`] while the CLI uses
//! [`JsonFileStorage`].

/// In-memory storage implementation
pub mod memory;

/// JSON file storage implementation
pub mod file;

use liftlog_core::constants::storage::{FOOD_ENTRIES_KEY, WORKOUTS_KEY};
use liftlog_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Keys under which the record collections are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The full workout collection
    Workouts,
    /// The full food entry collection
    FoodEntries,
}

impl StorageKey {
    /// The stable string key used by every backend
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workouts => WORKOUTS_KEY,
            Self::FoodEntries => FOOD_ENTRIES_KEY,
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend trait for pluggable persistence
///
/// Values are serde-serialized documents; a backend stores one document per
/// [`StorageKey`]. `get` of a key that was never written returns `Ok(None)`.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Retrieve and deserialize the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored document does
    /// not deserialize into `T`.
    async fn get<T: DeserializeOwned + Send>(&self, key: StorageKey) -> AppResult<Option<T>>;

    /// Serialize `value` and store it under `key`, replacing any previous
    /// document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend fails.
    async fn set<T: Serialize + Send + Sync>(&self, key: StorageKey, value: &T) -> AppResult<()>;

    /// Remove the document stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    async fn remove(&self, key: StorageKey) -> AppResult<()>;
}
