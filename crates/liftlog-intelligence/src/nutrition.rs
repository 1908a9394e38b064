// ABOUTME: Daily and all-time nutrition aggregation
// ABOUTME: Macro sums per date and collection-wide averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Nutrition summaries.
//!
//! Each macro is a plain linear sum or mean; there is no weighting and no
//! grouping by meal type here — the display layer groups the returned
//! `meals` however it likes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use liftlog_core::models::FoodEntry;

/// Macro totals for one calendar day, with the matching entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNutrition {
    /// The day summarized
    pub date: NaiveDate,
    /// Total energy (kcal)
    pub total_calories: f64,
    /// Total protein (g)
    pub total_protein_g: f64,
    /// Total carbohydrates (g)
    pub total_carbs_g: f64,
    /// Total fat (g)
    pub total_fat_g: f64,
    /// The entries logged on this day, in input order
    pub meals: Vec<FoodEntry>,
}

/// All-time nutrition averages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NutritionStats {
    /// Mean energy per entry (kcal); zero when no entries exist
    pub average_calories: f64,
    /// Mean protein per entry (g)
    pub average_protein_g: f64,
    /// Mean carbohydrates per entry (g)
    pub average_carbs_g: f64,
    /// Mean fat per entry (g)
    pub average_fat_g: f64,
    /// Number of logged entries
    pub total_meals: usize,
}

/// Sum the macros of every entry logged on `date`.
///
/// Entries on other dates are excluded entirely. The matching entries ride
/// along as `meals` for the display layer.
#[must_use]
pub fn daily_nutrition(entries: &[FoodEntry], date: NaiveDate) -> DailyNutrition {
    let meals: Vec<FoodEntry> = entries
        .iter()
        .filter(|entry| entry.date == date)
        .cloned()
        .collect();

    DailyNutrition {
        date,
        total_calories: meals.iter().map(|entry| entry.calories).sum(),
        total_protein_g: meals.iter().map(|entry| entry.protein_g).sum(),
        total_carbs_g: meals.iter().map(|entry| entry.carbs_g).sum(),
        total_fat_g: meals.iter().map(|entry| entry.fat_g).sum(),
        meals,
    }
}

/// All-time per-entry macro averages across every date.
///
/// Zero-guarded: an empty collection yields all-zero averages rather than
/// a division error.
#[must_use]
pub fn nutrition_stats(entries: &[FoodEntry]) -> NutritionStats {
    let total_meals = entries.len();
    if total_meals == 0 {
        return NutritionStats::default();
    }

    let count = total_meals as f64;
    NutritionStats {
        average_calories: entries.iter().map(|entry| entry.calories).sum::<f64>() / count,
        average_protein_g: entries.iter().map(|entry| entry.protein_g).sum::<f64>() / count,
        average_carbs_g: entries.iter().map(|entry| entry.carbs_g).sum::<f64>() / count,
        average_fat_g: entries.iter().map(|entry| entry.fat_g).sum::<f64>() / count,
        total_meals,
    }
}
