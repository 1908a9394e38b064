// ABOUTME: Workout domain models for strength training sessions
// ABOUTME: Workout, Exercise, WorkoutSet, and the MuscleGroup enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Training focus of a workout session
///
/// A fixed enumeration of nine split tags. The serde rename carries the
/// exact display string so stored data round-trips the human-readable form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    /// Chest and triceps day
    #[serde(rename = "Chest & Triceps")]
    ChestTriceps,
    /// Back and biceps day
    #[serde(rename = "Back & Biceps")]
    BackBiceps,
    /// Legs and shoulders day
    #[serde(rename = "Legs & Shoulders")]
    LegsShoulders,
    /// Push day (chest, shoulders, triceps)
    #[serde(rename = "Push")]
    Push,
    /// Pull day (back, biceps)
    #[serde(rename = "Pull")]
    Pull,
    /// Legs day
    #[serde(rename = "Legs")]
    Legs,
    /// Upper body day
    #[serde(rename = "Upper")]
    Upper,
    /// Lower body day
    #[serde(rename = "Lower")]
    Lower,
    /// Full body session
    #[serde(rename = "Full Body")]
    FullBody,
}

impl MuscleGroup {
    /// All nine muscle group tags, in display order
    pub const ALL: [Self; 9] = [
        Self::ChestTriceps,
        Self::BackBiceps,
        Self::LegsShoulders,
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::Upper,
        Self::Lower,
        Self::FullBody,
    ];

    /// Display string, identical to the serde rename
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChestTriceps => "Chest & Triceps",
            Self::BackBiceps => "Back & Biceps",
            Self::LegsShoulders => "Legs & Shoulders",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::FullBody => "Full Body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown muscle group: {s}")))
    }
}

/// A single set within an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    /// Unique identifier for this set
    pub id: Uuid,
    /// Repetitions performed
    pub reps: u32,
    /// Load in kilograms
    pub weight_kg: f64,
    /// Whether the set was actually completed
    ///
    /// Only completed sets contribute training volume; a planned but
    /// skipped set is tracked without counting.
    pub completed: bool,
}

impl WorkoutSet {
    /// Create a completed set with a fresh id
    #[must_use]
    pub fn new(reps: u32, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps,
            weight_kg,
            completed: true,
        }
    }

    /// Mark the set incomplete (logged but not performed)
    #[must_use]
    pub const fn incomplete(mut self) -> Self {
        self.completed = false;
        self
    }
}

/// An exercise and its ordered sets, owned by exactly one workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for this exercise instance
    pub id: Uuid,
    /// Exercise name (free-form, usually from a template)
    pub name: String,
    /// Demonstration video URL (display only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Ordered sets; insertion order is display order
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    /// Create an exercise with a fresh id and the given sets
    #[must_use]
    pub fn new(name: impl Into<String>, sets: Vec<WorkoutSet>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            video_url: None,
            sets,
        }
    }

    /// Attach a demonstration video URL
    #[must_use]
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }
}

/// A logged workout session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,
    /// Calendar date of the session; the unit of streak granularity
    pub date: NaiveDate,
    /// Training focus tag
    pub muscle_group: MuscleGroup,
    /// Ordered exercises; insertion order is display order
    pub exercises: Vec<Exercise>,
    /// Session duration in minutes (display only, unused by stats)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Free-form notes (unused by stats)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Create a workout with a fresh id
    #[must_use]
    pub fn new(date: NaiveDate, muscle_group: MuscleGroup, exercises: Vec<Exercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            muscle_group,
            exercises,
            duration_minutes: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn muscle_group_wire_strings_round_trip() {
        for group in MuscleGroup::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.as_str()));
            let back: MuscleGroup = serde_json::from_str(&json).unwrap();
            assert_eq!(back, group);
        }
    }

    #[test]
    fn muscle_group_parses_display_form() {
        let group: MuscleGroup = "Chest & Triceps".parse().unwrap();
        assert_eq!(group, MuscleGroup::ChestTriceps);
        assert!("Cardio".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn workout_date_serializes_iso() {
        let workout = Workout::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            MuscleGroup::Push,
            vec![],
        );
        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["date"], "2024-01-05");
    }
}
