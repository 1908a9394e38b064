// ABOUTME: Command-line interface for the LiftLog tracker
// ABOUTME: Seeds demo data and prints workout and nutrition statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! LiftLog CLI.
//!
//! Usage:
//! ```bash
//! # Seed a demo dataset into the data directory
//! cargo run --bin liftlog-cli -- seed
//!
//! # Print workout statistics
//! cargo run --bin liftlog-cli -- stats
//!
//! # Print today's nutrition summary and all-time averages
//! cargo run --bin liftlog-cli -- nutrition
//! cargo run --bin liftlog-cli -- nutrition --date 2024-03-10
//! ```

use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use liftlog::storage::JsonFileStorage;
use liftlog::store::FitnessStore;
use liftlog_core::constants::templates::{
    exercise_templates, scheduled_muscle_group, FOOD_SUGGESTIONS,
};
use liftlog_core::models::{Exercise, FoodEntry, MealType, Workout, WorkoutSet};
use liftlog_intelligence::trends::{muscle_group_frequency, weekly_consistency};

#[derive(Parser)]
#[command(
    name = "liftlog-cli",
    about = "LiftLog workout and nutrition tracker",
    version
)]
struct Cli {
    /// Data directory override (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed a small demo dataset (two weeks of workouts and meals)
    Seed,
    /// Print workout statistics for the stored data
    Stats,
    /// Print a daily nutrition summary and all-time averages
    Nutrition {
        /// Day to summarize (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    liftlog::logging::init();

    let cli = Cli::parse();
    let dir = cli
        .data_dir
        .unwrap_or_else(JsonFileStorage::default_data_dir);
    info!(dir = %dir.display(), "using data directory");

    let mut store = FitnessStore::load(JsonFileStorage::new(dir)).await?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Seed => seed(&mut store, today).await?,
        Command::Stats => print_stats(&store, today),
        Command::Nutrition { date } => print_nutrition(&store, date.unwrap_or(today)),
    }

    Ok(())
}

/// Seed two weeks of scheduled workouts plus a few meals per day.
async fn seed<S: liftlog::storage::StorageBackend>(
    store: &mut FitnessStore<S>,
    today: NaiveDate,
) -> Result<()> {
    for days_ago in (0..14).rev() {
        let date = today - Duration::days(days_ago);

        // Train the scheduled split, resting every third day.
        if days_ago % 3 != 2 {
            let group = scheduled_muscle_group(date.weekday());
            let exercises: Vec<Exercise> = exercise_templates(group)
                .iter()
                .take(3)
                .map(|template| {
                    let sets = vec![
                        WorkoutSet::new(10, 40.0),
                        WorkoutSet::new(8, 50.0),
                        WorkoutSet::new(6, 60.0),
                    ];
                    let exercise = Exercise::new(template.name, sets);
                    match template.video_url {
                        Some(url) => exercise.with_video_url(url),
                        None => exercise,
                    }
                })
                .collect();
            store.add_workout(Workout::new(date, group, exercises)).await?;
        }

        for (index, meal) in [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
            .into_iter()
            .enumerate()
        {
            let suggestion = FOOD_SUGGESTIONS[(days_ago as usize + index) % FOOD_SUGGESTIONS.len()];
            store
                .add_food_entry(FoodEntry::new(
                    date,
                    meal,
                    suggestion.name,
                    suggestion.calories,
                    suggestion.protein_g,
                    suggestion.carbs_g,
                    suggestion.fat_g,
                ))
                .await?;
        }
    }

    println!(
        "seeded {} workouts and {} food entries",
        store.workouts().len(),
        store.food_entries().len()
    );
    Ok(())
}

fn print_stats<S: liftlog::storage::StorageBackend>(store: &FitnessStore<S>, today: NaiveDate) {
    let stats = store.workout_stats(today);

    println!("Workouts:       {}", stats.total_workouts);
    println!("Total volume:   {:.1} kg", stats.total_volume_kg);
    println!("Average volume: {:.1} kg", stats.average_volume_kg);
    println!("Current streak: {} days", stats.current_streak);
    println!("Longest streak: {} days", stats.longest_streak);

    println!("\nBy muscle group:");
    for (group, count) in muscle_group_frequency(store.workouts()) {
        if let Some(group_stats) = stats.muscle_group_stats.get(&group) {
            println!(
                "  {:<18} {count:>3} workouts  {:>10.1} kg  last {}",
                group.as_str(),
                group_stats.volume_kg,
                group_stats.last_workout
            );
        }
    }

    println!("\nThis week:");
    for day in weekly_consistency(store.workouts(), today) {
        let mark = if day.trained { "x" } else { "-" };
        println!("  {} {} [{mark}]", day.weekday, day.date);
    }
}

fn print_nutrition<S: liftlog::storage::StorageBackend>(store: &FitnessStore<S>, date: NaiveDate) {
    let daily = store.daily_nutrition(date);
    println!("Nutrition for {date}:");
    println!("  Calories: {:.0} kcal", daily.total_calories);
    println!("  Protein:  {:.1} g", daily.total_protein_g);
    println!("  Carbs:    {:.1} g", daily.total_carbs_g);
    println!("  Fat:      {:.1} g", daily.total_fat_g);
    for meal in &daily.meals {
        println!(
            "    {:<10} {:<24} {:.0} kcal",
            meal.meal_type.as_str(),
            meal.name,
            meal.calories
        );
    }

    let stats = store.nutrition_stats();
    println!("\nAll-time ({} meals):", stats.total_meals);
    println!("  Avg calories: {:.0} kcal", stats.average_calories);
    println!("  Avg protein:  {:.1} g", stats.average_protein_g);
    println!("  Avg carbs:    {:.1} g", stats.average_carbs_g);
    println!("  Avg fat:      {:.1} g", stats.average_fat_g);
}
