// ABOUTME: Tests for nutrition aggregation and chart trend series
// ABOUTME: Daily macro sums, all-time averages, volume window, weekly grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{NaiveDate, Weekday};
use liftlog_core::models::{Exercise, FoodEntry, MealType, MuscleGroup, Workout, WorkoutSet};
use liftlog_intelligence::nutrition::{daily_nutrition, nutrition_stats};
use liftlog_intelligence::trends::{
    daily_volume_series, muscle_group_frequency, weekly_consistency,
};

const EPSILON: f64 = 1e-9;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(day: NaiveDate, meal: MealType, calories: f64) -> FoodEntry {
    FoodEntry::new(day, meal, "Test Food", calories, 20.0, 30.0, 10.0)
}

fn simple_workout(day: NaiveDate, group: MuscleGroup) -> Workout {
    Workout::new(
        day,
        group,
        vec![Exercise::new("Squats", vec![WorkoutSet::new(10, 100.0)])],
    )
}

// ============================================================================
// Nutrition Tests
// ============================================================================

#[test]
fn test_daily_nutrition_sums_only_matching_date() {
    let day = date(2024, 2, 1);
    let entries = vec![
        entry(day, MealType::Breakfast, 400.0),
        entry(day, MealType::Lunch, 600.0),
        entry(date(2024, 2, 2), MealType::Dinner, 900.0),
    ];

    let daily = daily_nutrition(&entries, day);
    assert!((daily.total_calories - 1000.0).abs() < EPSILON);
    assert!((daily.total_protein_g - 40.0).abs() < EPSILON);
    assert!((daily.total_carbs_g - 60.0).abs() < EPSILON);
    assert!((daily.total_fat_g - 20.0).abs() < EPSILON);
    assert_eq!(daily.meals.len(), 2);
}

#[test]
fn test_daily_nutrition_empty_day_is_all_zero() {
    let daily = daily_nutrition(&[], date(2024, 2, 1));
    assert!(daily.total_calories.abs() < EPSILON);
    assert!(daily.meals.is_empty());
}

#[test]
fn test_daily_nutrition_preserves_input_order() {
    // Grouping by meal type is a display concern; the engine keeps order.
    let day = date(2024, 2, 1);
    let entries = vec![
        entry(day, MealType::Dinner, 700.0),
        entry(day, MealType::Breakfast, 300.0),
    ];
    let daily = daily_nutrition(&entries, day);
    assert_eq!(daily.meals[0].meal_type, MealType::Dinner);
    assert_eq!(daily.meals[1].meal_type, MealType::Breakfast);
}

#[test]
fn test_nutrition_stats_averages_across_all_dates() {
    let entries = vec![
        entry(date(2024, 2, 1), MealType::Breakfast, 300.0),
        entry(date(2024, 2, 8), MealType::Dinner, 900.0),
    ];
    let stats = nutrition_stats(&entries);
    assert_eq!(stats.total_meals, 2);
    assert!((stats.average_calories - 600.0).abs() < EPSILON);
    assert!((stats.average_protein_g - 20.0).abs() < EPSILON);
}

#[test]
fn test_nutrition_stats_empty_collection_zero_guard() {
    let stats = nutrition_stats(&[]);
    assert_eq!(stats.total_meals, 0);
    assert!(stats.average_calories.abs() < EPSILON);
    assert!(!stats.average_calories.is_nan());
}

// ============================================================================
// Trend Series Tests
// ============================================================================

#[test]
fn test_daily_volume_series_window_and_order() {
    let end = date(2024, 3, 10);
    let workouts = vec![
        simple_workout(date(2024, 3, 9), MuscleGroup::Push),
        simple_workout(date(2024, 3, 1), MuscleGroup::Pull),
    ];

    let series = daily_volume_series(&workouts, end, 7);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, date(2024, 3, 4));
    assert_eq!(series[6].date, end);

    // 2024-03-01 falls outside the 7-day window.
    assert!(series.iter().all(|day| day.date != date(2024, 3, 1)));
    let trained_day = series.iter().find(|d| d.date == date(2024, 3, 9)).unwrap();
    assert!((trained_day.volume_kg - 1000.0).abs() < EPSILON);
    assert!(series[6].volume_kg.abs() < EPSILON);
}

#[test]
fn test_daily_volume_series_merges_same_day_workouts() {
    let end = date(2024, 3, 10);
    let workouts = vec![
        simple_workout(end, MuscleGroup::Push),
        simple_workout(end, MuscleGroup::Pull),
    ];
    let series = daily_volume_series(&workouts, end, 1);
    assert_eq!(series.len(), 1);
    assert!((series[0].volume_kg - 2000.0).abs() < EPSILON);
}

#[test]
fn test_muscle_group_frequency_sorted_descending() {
    let workouts = vec![
        simple_workout(date(2024, 3, 1), MuscleGroup::Legs),
        simple_workout(date(2024, 3, 2), MuscleGroup::Legs),
        simple_workout(date(2024, 3, 3), MuscleGroup::Push),
    ];
    let frequency = muscle_group_frequency(&workouts);
    assert_eq!(frequency, vec![(MuscleGroup::Legs, 2), (MuscleGroup::Push, 1)]);
}

#[test]
fn test_muscle_group_frequency_ties_use_display_order() {
    let workouts = vec![
        simple_workout(date(2024, 3, 1), MuscleGroup::FullBody),
        simple_workout(date(2024, 3, 2), MuscleGroup::ChestTriceps),
    ];
    let frequency = muscle_group_frequency(&workouts);
    assert_eq!(
        frequency,
        vec![(MuscleGroup::ChestTriceps, 1), (MuscleGroup::FullBody, 1)]
    );
}

#[test]
fn test_weekly_consistency_sunday_through_saturday() {
    // 2024-03-06 is a Wednesday; its week runs Sun 03-03 .. Sat 03-09.
    let reference = date(2024, 3, 6);
    let workouts = vec![
        simple_workout(date(2024, 3, 4), MuscleGroup::Upper),
        simple_workout(date(2024, 3, 10), MuscleGroup::Lower),
    ];

    let week = weekly_consistency(&workouts, reference);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, date(2024, 3, 3));
    assert_eq!(week[0].weekday, Weekday::Sun);
    assert_eq!(week[6].date, date(2024, 3, 9));
    assert_eq!(week[6].weekday, Weekday::Sat);

    // Monday trained, everything else (including next Sunday) is not in range.
    assert!(week[1].trained);
    assert_eq!(week.iter().filter(|day| day.trained).count(), 1);
}
