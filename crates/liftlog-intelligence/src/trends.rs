// ABOUTME: Chart-ready trend series derived from the workout collection
// ABOUTME: Daily volume window, muscle-group frequency, weekly consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Trend series for the analytics charts.
//!
//! Like the rest of the engine these are pure per-call computations; the
//! consumer picks the window by passing the end date explicitly.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use liftlog_core::models::{MuscleGroup, Workout};

use crate::volume::workout_volume;

/// Total volume logged on one calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyVolume {
    /// The day
    pub date: NaiveDate,
    /// Summed volume of every workout on that day (kg); zero for rest days
    pub volume_kg: f64,
}

/// One day of the weekly consistency grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayActivity {
    /// The day
    pub date: NaiveDate,
    /// Day of week, for chart labels
    pub weekday: Weekday,
    /// Whether at least one workout was logged
    pub trained: bool,
}

/// Per-day total volume for a trailing window of `days` days ending at
/// `end` (inclusive), oldest first. Days without workouts appear with zero
/// volume so the series is dense for charting.
#[must_use]
pub fn daily_volume_series(workouts: &[Workout], end: NaiveDate, days: u32) -> Vec<DailyVolume> {
    let mut by_date: HashMap<NaiveDate, f64> = HashMap::new();
    for workout in workouts {
        *by_date.entry(workout.date).or_insert(0.0) += workout_volume(workout);
    }

    (0..days)
        .map(|offset| {
            let date = end - Duration::days(i64::from(days - 1 - offset));
            DailyVolume {
                date,
                volume_kg: by_date.get(&date).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

/// Workout count per muscle group, most frequent first.
///
/// Ties break on the fixed display order of [`MuscleGroup::ALL`] so the
/// chart is stable across calls. Only groups present in the data appear.
#[must_use]
pub fn muscle_group_frequency(workouts: &[Workout]) -> Vec<(MuscleGroup, u32)> {
    let mut counts: HashMap<MuscleGroup, u32> = HashMap::new();
    for workout in workouts {
        *counts.entry(workout.muscle_group).or_insert(0) += 1;
    }

    let mut frequency: Vec<(MuscleGroup, u32)> = counts.into_iter().collect();
    frequency.sort_by_key(|&(group, count)| {
        let display_rank = MuscleGroup::ALL
            .iter()
            .position(|candidate| *candidate == group)
            .unwrap_or(MuscleGroup::ALL.len());
        (std::cmp::Reverse(count), display_rank)
    });
    frequency
}

/// Consistency grid for the calendar week containing `reference`.
///
/// The week starts on Sunday. Returns exactly seven entries, Sunday
/// through Saturday, each flagging whether a workout was logged.
#[must_use]
pub fn weekly_consistency(workouts: &[Workout], reference: NaiveDate) -> Vec<DayActivity> {
    let days_into_week = i64::from(reference.weekday().num_days_from_sunday());
    let week_start = reference - Duration::days(days_into_week);

    (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            DayActivity {
                date,
                weekday: date.weekday(),
                trained: workouts.iter().any(|workout| workout.date == date),
            }
        })
        .collect()
}
