// ABOUTME: Training volume computation and per-muscle-group aggregation
// ABOUTME: Set/exercise/workout volume plus whole-collection rollups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Training volume.
//!
//! Volume is the standard training-load proxy: `reps * weight` summed over
//! completed sets. A set that was logged but not completed is tracked
//! without contributing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use liftlog_core::models::{Exercise, MuscleGroup, Workout, WorkoutSet};

/// Volume contribution of a single set (kg)
///
/// Zero unless the set is completed.
#[must_use]
pub fn set_volume(set: &WorkoutSet) -> f64 {
    if set.completed {
        f64::from(set.reps) * set.weight_kg
    } else {
        0.0
    }
}

/// Volume of one exercise: the sum over its sets (kg)
#[must_use]
pub fn exercise_volume(exercise: &Exercise) -> f64 {
    exercise.sets.iter().map(set_volume).sum()
}

/// Total volume of a workout (kg)
///
/// Total over all exercises; empty exercise lists yield zero.
#[must_use]
pub fn workout_volume(workout: &Workout) -> f64 {
    workout.exercises.iter().map(exercise_volume).sum()
}

/// Rollup for a single muscle group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleGroupStats {
    /// Number of workouts tagged with this group
    pub workouts: u32,
    /// Total volume across those workouts (kg)
    pub volume_kg: f64,
    /// Most recent workout date for this group
    pub last_workout: NaiveDate,
}

/// Whole-collection volume aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VolumeAggregate {
    /// Number of logged workouts
    pub total_workouts: usize,
    /// Total training volume (kg)
    pub total_volume_kg: f64,
    /// Mean volume per workout (kg); zero when no workouts exist
    pub average_volume_kg: f64,
    /// Per-muscle-group rollups, keyed only by groups present in the data
    pub muscle_group_stats: HashMap<MuscleGroup, MuscleGroupStats>,
}

/// Aggregate volume statistics over the full workout collection.
///
/// A single linear scan; input order is irrelevant. The average is
/// zero-guarded rather than an error when the collection is empty.
#[must_use]
pub fn aggregate_volume(workouts: &[Workout]) -> VolumeAggregate {
    let mut total_volume_kg = 0.0;
    let mut muscle_group_stats: HashMap<MuscleGroup, MuscleGroupStats> = HashMap::new();

    for workout in workouts {
        let volume = workout_volume(workout);
        total_volume_kg += volume;

        muscle_group_stats
            .entry(workout.muscle_group)
            .and_modify(|stats| {
                stats.workouts += 1;
                stats.volume_kg += volume;
                stats.last_workout = stats.last_workout.max(workout.date);
            })
            .or_insert_with(|| MuscleGroupStats {
                workouts: 1,
                volume_kg: volume,
                last_workout: workout.date,
            });
    }

    let total_workouts = workouts.len();
    let average_volume_kg = if total_workouts == 0 {
        0.0
    } else {
        total_volume_kg / total_workouts as f64
    };

    VolumeAggregate {
        total_workouts,
        total_volume_kg,
        average_volume_kg,
        muscle_group_stats,
    }
}
