// ABOUTME: Core types and constants for the LiftLog tracking platform
// ABOUTME: Foundation crate with domain models, error types, and template data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing shared types for the LiftLog workout and
//! nutrition tracker. This crate is designed to change infrequently so the
//! statistics engine and application layer recompile independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Domain records (`Workout`, `Exercise`, `WorkoutSet`, `FoodEntry`)
//! - **constants**: Storage keys, the weekly schedule, and exercise template tables

/// Unified error handling with standard error codes
pub mod errors;

/// Domain records for workouts and food entries
pub mod models;

/// Storage keys, weekly schedule, and exercise template tables
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Exercise, FoodEntry, MealType, MuscleGroup, Workout, WorkoutSet};
