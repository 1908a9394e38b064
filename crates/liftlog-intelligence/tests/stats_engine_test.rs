// ABOUTME: Tests for the volume aggregator and streak calculator
// ABOUTME: Covers zero-guards, gap leniency, streak decay, and rollup keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Statistics engine tests for workout volume and streaks, with pinned
//! reference dates so nothing here depends on the wall clock.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use liftlog_core::models::{Exercise, MuscleGroup, Workout, WorkoutSet};
use liftlog_intelligence::streaks::{streak_summary, StreakSummary};
use liftlog_intelligence::volume::{aggregate_volume, workout_volume};
use liftlog_intelligence::workout_stats;

const EPSILON: f64 = 1e-9;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn workout_with_sets(day: NaiveDate, group: MuscleGroup, sets: Vec<WorkoutSet>) -> Workout {
    Workout::new(day, group, vec![Exercise::new("Bench Press", sets)])
}

// ============================================================================
// Volume Tests
// ============================================================================

#[test]
fn test_incomplete_sets_contribute_no_volume() {
    let workout = workout_with_sets(
        date(2024, 1, 5),
        MuscleGroup::ChestTriceps,
        vec![
            WorkoutSet::new(10, 60.0).incomplete(),
            WorkoutSet::new(8, 80.0).incomplete(),
        ],
    );
    assert!(workout_volume(&workout).abs() < EPSILON);
}

#[test]
fn test_volume_is_additive_across_exercises_and_sets() {
    let mut workout = Workout::new(
        date(2024, 1, 5),
        MuscleGroup::Push,
        vec![
            Exercise::new("Bench Press", vec![WorkoutSet::new(10, 60.0)]),
            Exercise::new("Shoulder Press", vec![WorkoutSet::new(8, 40.0)]),
        ],
    );
    let before = workout_volume(&workout);
    assert!((before - (600.0 + 320.0)).abs() < EPSILON);

    // Adding a completed set {reps: 5, weight: 100} raises volume by exactly 500.
    workout.exercises[1].sets.push(WorkoutSet::new(5, 100.0));
    let after = workout_volume(&workout);
    assert!((after - before - 500.0).abs() < EPSILON);
}

#[test]
fn test_empty_workout_has_zero_volume() {
    let workout = Workout::new(date(2024, 1, 5), MuscleGroup::Legs, vec![]);
    assert!(workout_volume(&workout).abs() < EPSILON);
}

#[test]
fn test_empty_collection_average_is_zero_not_nan() {
    let aggregate = aggregate_volume(&[]);
    assert_eq!(aggregate.total_workouts, 0);
    assert!(aggregate.average_volume_kg.abs() < EPSILON);
    assert!(!aggregate.average_volume_kg.is_nan());
    assert!(aggregate.muscle_group_stats.is_empty());
}

#[test]
fn test_aggregate_totals_and_average() {
    let workouts = vec![
        workout_with_sets(
            date(2024, 1, 5),
            MuscleGroup::Push,
            vec![WorkoutSet::new(10, 50.0)],
        ),
        workout_with_sets(
            date(2024, 1, 6),
            MuscleGroup::Pull,
            vec![WorkoutSet::new(10, 30.0)],
        ),
    ];
    let aggregate = aggregate_volume(&workouts);
    assert_eq!(aggregate.total_workouts, 2);
    assert!((aggregate.total_volume_kg - 800.0).abs() < EPSILON);
    assert!((aggregate.average_volume_kg - 400.0).abs() < EPSILON);
}

#[test]
fn test_muscle_group_rollup_keys_only_observed_groups() {
    let workouts = vec![workout_with_sets(
        date(2024, 1, 5),
        MuscleGroup::Legs,
        vec![WorkoutSet::new(5, 100.0)],
    )];
    let aggregate = aggregate_volume(&workouts);
    assert_eq!(aggregate.muscle_group_stats.len(), 1);
    assert!(aggregate.muscle_group_stats.contains_key(&MuscleGroup::Legs));
}

#[test]
fn test_muscle_group_last_workout_is_max_date() {
    let workouts = vec![
        workout_with_sets(
            date(2024, 1, 10),
            MuscleGroup::BackBiceps,
            vec![WorkoutSet::new(8, 60.0)],
        ),
        workout_with_sets(
            date(2024, 1, 5),
            MuscleGroup::BackBiceps,
            vec![WorkoutSet::new(8, 60.0)],
        ),
    ];
    let aggregate = aggregate_volume(&workouts);
    let stats = &aggregate.muscle_group_stats[&MuscleGroup::BackBiceps];
    assert_eq!(stats.workouts, 2);
    assert_eq!(stats.last_workout, date(2024, 1, 10));
}

// ============================================================================
// Streak Tests
// ============================================================================

#[test]
fn test_streak_empty_input() {
    let summary = streak_summary(&[], date(2024, 3, 10));
    assert_eq!(summary, StreakSummary { current: 0, longest: 0 });
}

#[test]
fn test_streak_single_workout_today() {
    let reference = date(2024, 3, 10);
    let summary = streak_summary(&[reference], reference);
    assert_eq!(summary, StreakSummary { current: 1, longest: 1 });
}

#[test]
fn test_streak_single_workout_yesterday() {
    let summary = streak_summary(&[date(2024, 3, 9)], date(2024, 3, 10));
    assert_eq!(summary, StreakSummary { current: 1, longest: 1 });
}

#[test]
fn test_streak_lenient_two_day_gaps() {
    // D, D+2, D+4 with D+4 == today: one run of three training days.
    let reference = date(2024, 3, 10);
    let dates = [date(2024, 3, 6), date(2024, 3, 8), date(2024, 3, 10)];
    let summary = streak_summary(&dates, reference);
    assert_eq!(summary, StreakSummary { current: 3, longest: 3 });
}

#[test]
fn test_streak_three_day_gap_breaks_run() {
    // D and D+5 are separate runs; the one ending today has length 1.
    let reference = date(2024, 3, 10);
    let dates = [date(2024, 3, 5), date(2024, 3, 10)];
    let summary = streak_summary(&dates, reference);
    assert_eq!(summary, StreakSummary { current: 1, longest: 1 });
}

#[test]
fn test_streak_decays_after_grace_window() {
    // One workout three days before the reference: history keeps the run,
    // the current streak reads zero.
    let summary = streak_summary(&[date(2024, 3, 7)], date(2024, 3, 10));
    assert_eq!(summary, StreakSummary { current: 0, longest: 1 });
}

#[test]
fn test_streak_longest_survives_break() {
    // A five-day run long ago, then a lone recent workout.
    let reference = date(2024, 6, 1);
    let dates = [
        date(2024, 1, 1),
        date(2024, 1, 2),
        date(2024, 1, 3),
        date(2024, 1, 4),
        date(2024, 1, 5),
        date(2024, 6, 1),
    ];
    let summary = streak_summary(&dates, reference);
    assert_eq!(summary, StreakSummary { current: 1, longest: 5 });
}

#[test]
fn test_streak_same_data_later_reference_decays_current() {
    let dates = [date(2024, 3, 8), date(2024, 3, 9), date(2024, 3, 10)];
    let fresh = streak_summary(&dates, date(2024, 3, 10));
    assert_eq!(fresh, StreakSummary { current: 3, longest: 3 });

    let stale = streak_summary(&dates, date(2024, 3, 14));
    assert_eq!(stale, StreakSummary { current: 0, longest: 3 });
}

// ============================================================================
// Combined WorkoutStats Tests
// ============================================================================

#[test]
fn test_workout_stats_combines_volume_and_streaks() {
    let reference = date(2024, 3, 10);
    let workouts = vec![
        workout_with_sets(
            date(2024, 3, 9),
            MuscleGroup::Push,
            vec![WorkoutSet::new(10, 50.0)],
        ),
        workout_with_sets(
            date(2024, 3, 10),
            MuscleGroup::Pull,
            vec![WorkoutSet::new(10, 40.0), WorkoutSet::new(10, 40.0).incomplete()],
        ),
    ];

    let stats = workout_stats(&workouts, reference);
    assert_eq!(stats.total_workouts, 2);
    assert!((stats.total_volume_kg - 900.0).abs() < EPSILON);
    assert!((stats.average_volume_kg - 450.0).abs() < EPSILON);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.muscle_group_stats.len(), 2);
}
