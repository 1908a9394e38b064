// ABOUTME: The load-mutate-persist store owning the record collections
// ABOUTME: CRUD for workouts and food entries plus stats entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! The fitness store.
//!
//! `FitnessStore` owns the materialized workout and food-entry collections
//! and is the single writer. Every mutation follows the same cycle: build
//! the full replacement collection, persist it through the backend, then
//! swap the in-memory copy. The statistics engine only ever sees the
//! fully-materialized snapshot, never a half-applied mutation — if the
//! persist fails, the in-memory collection is left untouched.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{FoodEntry, MuscleGroup, Workout};
use liftlog_intelligence::{
    daily_nutrition, nutrition_stats, workout_stats, DailyNutrition, NutritionStats, WorkoutStats,
};

use crate::storage::{StorageBackend, StorageKey};

/// Store owning the workout and food-entry collections
pub struct FitnessStore<S> {
    backend: S,
    workouts: Vec<Workout>,
    food_entries: Vec<FoodEntry>,
}

impl<S: StorageBackend> FitnessStore<S> {
    /// Load both collections from the backend.
    ///
    /// Missing documents load as empty collections (first run).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or a stored document does not
    /// deserialize.
    pub async fn load(backend: S) -> AppResult<Self> {
        let workouts: Vec<Workout> = backend.get(StorageKey::Workouts).await?.unwrap_or_default();
        let food_entries: Vec<FoodEntry> = backend
            .get(StorageKey::FoodEntries)
            .await?
            .unwrap_or_default();

        info!(
            workouts = workouts.len(),
            food_entries = food_entries.len(),
            "loaded collections"
        );

        Ok(Self {
            backend,
            workouts,
            food_entries,
        })
    }

    /// The current workout collection snapshot
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// The current food entry collection snapshot
    #[must_use]
    pub fn food_entries(&self) -> &[FoodEntry] {
        &self.food_entries
    }

    async fn persist_workouts(&mut self, replacement: Vec<Workout>) -> AppResult<()> {
        self.backend.set(StorageKey::Workouts, &replacement).await?;
        self.workouts = replacement;
        Ok(())
    }

    async fn persist_food_entries(&mut self, replacement: Vec<FoodEntry>) -> AppResult<()> {
        self.backend
            .set(StorageKey::FoodEntries, &replacement)
            .await?;
        self.food_entries = replacement;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Workout CRUD
    // ------------------------------------------------------------------

    /// Append a workout and persist the replacement collection.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a workout without exercises,
    /// or a storage error if the persist fails.
    pub async fn add_workout(&mut self, workout: Workout) -> AppResult<Uuid> {
        if workout.exercises.is_empty() {
            return Err(AppError::new(
                liftlog_core::errors::ErrorCode::MissingRequiredField,
                "a workout needs at least one exercise",
            ));
        }

        let id = workout.id;
        debug!(%id, date = %workout.date, muscle_group = %workout.muscle_group, "adding workout");

        let mut replacement = self.workouts.clone();
        replacement.push(workout);
        self.persist_workouts(replacement).await?;
        Ok(id)
    }

    /// Replace the workout with the given id, keeping the id stable.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no workout has that id, or a storage
    /// error if the persist fails.
    pub async fn update_workout(&mut self, id: Uuid, mut workout: Workout) -> AppResult<()> {
        let mut replacement = self.workouts.clone();
        let slot = replacement
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| AppError::not_found("workout", id))?;
        workout.id = id;
        *slot = workout;
        self.persist_workouts(replacement).await
    }

    /// Delete the workout with the given id.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no workout has that id, or a storage
    /// error if the persist fails.
    pub async fn delete_workout(&mut self, id: Uuid) -> AppResult<()> {
        let mut replacement = self.workouts.clone();
        let before = replacement.len();
        replacement.retain(|workout| workout.id != id);
        if replacement.len() == before {
            return Err(AppError::not_found("workout", id));
        }
        self.persist_workouts(replacement).await
    }

    // ------------------------------------------------------------------
    // Food entry CRUD
    // ------------------------------------------------------------------

    /// Append a food entry and persist the replacement collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persist fails.
    pub async fn add_food_entry(&mut self, entry: FoodEntry) -> AppResult<Uuid> {
        let id = entry.id;
        debug!(%id, date = %entry.date, meal_type = %entry.meal_type, "adding food entry");

        let mut replacement = self.food_entries.clone();
        replacement.push(entry);
        self.persist_food_entries(replacement).await?;
        Ok(id)
    }

    /// Replace the food entry with the given id, keeping the id stable.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no entry has that id, or a storage
    /// error if the persist fails.
    pub async fn update_food_entry(&mut self, id: Uuid, mut entry: FoodEntry) -> AppResult<()> {
        let mut replacement = self.food_entries.clone();
        let slot = replacement
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| AppError::not_found("food entry", id))?;
        entry.id = id;
        *slot = entry;
        self.persist_food_entries(replacement).await
    }

    /// Delete the food entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no entry has that id, or a storage
    /// error if the persist fails.
    pub async fn delete_food_entry(&mut self, id: Uuid) -> AppResult<()> {
        let mut replacement = self.food_entries.clone();
        let before = replacement.len();
        replacement.retain(|entry| entry.id != id);
        if replacement.len() == before {
            return Err(AppError::not_found("food entry", id));
        }
        self.persist_food_entries(replacement).await
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Workouts logged on a given date
    #[must_use]
    pub fn workouts_by_date(&self, date: NaiveDate) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|workout| workout.date == date)
            .collect()
    }

    /// Workouts tagged with a given muscle group
    #[must_use]
    pub fn workouts_by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|workout| workout.muscle_group == muscle_group)
            .collect()
    }

    /// Food entries logged on a given date
    #[must_use]
    pub fn food_entries_by_date(&self, date: NaiveDate) -> Vec<&FoodEntry> {
        self.food_entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Workout statistics for the current snapshot.
    ///
    /// `reference` is the caller's "today" and only affects the current
    /// streak.
    #[must_use]
    pub fn workout_stats(&self, reference: NaiveDate) -> WorkoutStats {
        workout_stats(&self.workouts, reference)
    }

    /// Macro totals for one day
    #[must_use]
    pub fn daily_nutrition(&self, date: NaiveDate) -> DailyNutrition {
        daily_nutrition(&self.food_entries, date)
    }

    /// All-time nutrition averages
    #[must_use]
    pub fn nutrition_stats(&self) -> NutritionStats {
        nutrition_stats(&self.food_entries)
    }
}
