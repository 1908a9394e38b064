// ABOUTME: Domain records for workouts and food entries
// ABOUTME: Workout, Exercise, WorkoutSet, MuscleGroup, FoodEntry, MealType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Domain models for the LiftLog tracker.
//!
//! All records serialize with serde; calendar dates are `chrono::NaiveDate`
//! and hit the wire as `YYYY-MM-DD`, so the stored form sorts
//! lexicographically in chronological order.

/// Workout records: `Workout`, `Exercise`, `WorkoutSet`, `MuscleGroup`
pub mod workout;

/// Nutrition records: `FoodEntry`, `MealType`
pub mod nutrition;

pub use nutrition::{FoodEntry, MealType};
pub use workout::{Exercise, MuscleGroup, Workout, WorkoutSet};
