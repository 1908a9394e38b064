// ABOUTME: Statistics engine for the LiftLog tracking platform
// ABOUTME: Pure volume, streak, nutrition, and trend computations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

#![deny(unsafe_code)]

//! # LiftLog Intelligence
//!
//! The statistics engine: a set of pure, synchronous functions over the
//! materialized workout and food-entry collections. Nothing in this crate
//! holds state, reads the clock, or can fail — every function is total over
//! well-formed records, and every statistic is recomputed per call from the
//! snapshot it is handed.
//!
//! The one time-dependent computation, the training streak, takes its
//! "today" as an explicit `reference` parameter so callers (and tests)
//! control it.
//!
//! ## Modules
//!
//! - **volume**: training volume and per-muscle-group aggregation
//! - **streaks**: gap-tolerant consecutive-training-day streaks
//! - **nutrition**: daily and all-time macro summaries
//! - **trends**: chart-ready series (volume over time, frequency, weekly grid)

/// Training volume and per-muscle-group aggregation
pub mod volume;

/// Consecutive-training-day streak calculation
pub mod streaks;

/// Daily and all-time nutrition summaries
pub mod nutrition;

/// Chart-ready trend series
pub mod trends;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use liftlog_core::models::{MuscleGroup, Workout};

pub use nutrition::{daily_nutrition, nutrition_stats, DailyNutrition, NutritionStats};
pub use streaks::{streak_summary, StreakSummary};
pub use volume::{aggregate_volume, workout_volume, MuscleGroupStats, VolumeAggregate};

/// Full workout statistics: volume aggregates plus streaks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutStats {
    /// Number of logged workouts
    pub total_workouts: usize,
    /// Total training volume across all workouts (kg)
    pub total_volume_kg: f64,
    /// Mean volume per workout (kg); zero when no workouts exist
    pub average_volume_kg: f64,
    /// Current streak in training days (zero once the streak decays)
    pub current_streak: u32,
    /// Longest historical streak in training days
    pub longest_streak: u32,
    /// Per-muscle-group rollups, keyed only by groups present in the data
    pub muscle_group_stats: HashMap<MuscleGroup, MuscleGroupStats>,
}

/// Compute the full workout statistics for a snapshot of the collection.
///
/// `reference` is the caller's "today"; it only influences the current
/// streak. The same snapshot queried with a later reference date can
/// therefore report a lower (possibly zero) current streak.
#[must_use]
pub fn workout_stats(workouts: &[Workout], reference: NaiveDate) -> WorkoutStats {
    let volume = volume::aggregate_volume(workouts);
    let streaks = streaks::workout_streaks(workouts, reference);

    debug!(
        total_workouts = volume.total_workouts,
        total_volume_kg = volume.total_volume_kg,
        current_streak = streaks.current,
        longest_streak = streaks.longest,
        "computed workout stats"
    );

    WorkoutStats {
        total_workouts: volume.total_workouts,
        total_volume_kg: volume.total_volume_kg,
        average_volume_kg: volume.average_volume_kg,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        muscle_group_stats: volume.muscle_group_stats,
    }
}
