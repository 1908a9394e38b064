// ABOUTME: Application layer for the LiftLog tracking platform
// ABOUTME: Pluggable storage backends and the load-mutate-persist store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

#![deny(unsafe_code)]

//! # LiftLog
//!
//! On-device workout and nutrition tracking. This crate supplies the
//! collaborators around the pure statistics engine
//! ([`liftlog_intelligence`]): pluggable key-value persistence, the store
//! that owns the materialized collections and applies every mutation as a
//! whole-collection replace-and-persist, and logging setup for the CLI.
//!
//! The engine never touches storage; the store hands it a fully
//! materialized snapshot and an explicit reference date.

/// Pluggable key-value storage backends
pub mod storage;

/// The load-mutate-persist store owning the record collections
pub mod store;

/// Tracing subscriber setup
pub mod logging;

pub use storage::{JsonFileStorage, MemoryStorage, StorageBackend, StorageKey};
pub use store::FitnessStore;
