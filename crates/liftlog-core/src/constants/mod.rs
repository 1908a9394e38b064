// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Storage keys plus the static schedule and template tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Application constants.

/// Weekly schedule, exercise templates, and food suggestions
pub mod templates;

/// Storage keys for the persisted collections
pub mod storage {
    /// Key under which the full workout collection is persisted
    pub const WORKOUTS_KEY: &str = "gym_workouts";

    /// Key under which the full food entry collection is persisted
    pub const FOOD_ENTRIES_KEY: &str = "food_entries";
}
