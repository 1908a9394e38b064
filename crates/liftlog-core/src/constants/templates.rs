// ABOUTME: Static lookup tables for the add-workout and nutrition flows
// ABOUTME: Weekly muscle-group schedule, exercise templates, food suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Fixed template data. Nothing here is computed; these tables seed the
//! add-workout flow (suggested split and exercises for the day) and the
//! food logging flow (common foods with known macros).

use chrono::Weekday;

use crate::models::MuscleGroup;

/// An exercise suggestion with an optional demonstration video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Demonstration video URL
    pub video_url: Option<&'static str>,
}

const fn template(name: &'static str, video_url: &'static str) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        video_url: Some(video_url),
    }
}

/// Suggested muscle group for each day of the week
#[must_use]
pub const fn scheduled_muscle_group(day: Weekday) -> MuscleGroup {
    match day {
        Weekday::Mon | Weekday::Thu => MuscleGroup::ChestTriceps,
        Weekday::Tue | Weekday::Fri => MuscleGroup::BackBiceps,
        Weekday::Wed | Weekday::Sat => MuscleGroup::LegsShoulders,
        Weekday::Sun => MuscleGroup::FullBody,
    }
}

/// Exercise templates for a muscle group
#[must_use]
pub const fn exercise_templates(group: MuscleGroup) -> &'static [ExerciseTemplate] {
    match group {
        MuscleGroup::ChestTriceps => CHEST_TRICEPS,
        MuscleGroup::BackBiceps => BACK_BICEPS,
        MuscleGroup::LegsShoulders => LEGS_SHOULDERS,
        MuscleGroup::Push => PUSH,
        MuscleGroup::Pull => PULL,
        MuscleGroup::Legs => LEGS,
        MuscleGroup::Upper => UPPER,
        MuscleGroup::Lower => LOWER,
        MuscleGroup::FullBody => FULL_BODY,
    }
}

const CHEST_TRICEPS: &[ExerciseTemplate] = &[
    template("Bench Press", "https://www.youtube.com/watch?v=rT7DgCr-3pg"),
    template("Incline Dumbbell Press", "https://www.youtube.com/watch?v=8iPEnn-ltC8"),
    template("Decline Barbell Press", "https://www.youtube.com/watch?v=LfyQBUKR8SE"),
    template("Chest Flyes", "https://www.youtube.com/watch?v=eozdVDA78K0"),
    template("Push-ups", "https://www.youtube.com/watch?v=IODxDxX7oi4"),
    template("Tricep Dips", "https://www.youtube.com/watch?v=6kALZikXxLc"),
    template("Close-Grip Bench Press", "https://www.youtube.com/watch?v=nEF0bv2FW94"),
    template("Tricep Extensions", "https://www.youtube.com/watch?v=nRiJVZDpdL0"),
    template("Overhead Tricep Press", "https://www.youtube.com/watch?v=YbX7Wd8jQ-Q"),
    template("Diamond Push-ups", "https://www.youtube.com/watch?v=J0DnG1_S92I"),
];

const BACK_BICEPS: &[ExerciseTemplate] = &[
    template("Pull-ups", "https://www.youtube.com/watch?v=eGo4IYlbE5g"),
    template("Lat Pulldowns", "https://www.youtube.com/watch?v=CAwf7n6Luuc"),
    template("Barbell Rows", "https://www.youtube.com/watch?v=FWJR5Ve8bnQ"),
    template("Dumbbell Rows", "https://www.youtube.com/watch?v=roCP6wCXPqo"),
    template("T-Bar Rows", "https://www.youtube.com/watch?v=j3Igk5nyZE4"),
    template("Cable Rows", "https://www.youtube.com/watch?v=xQNrFHEMhI4"),
    template("Barbell Curls", "https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
    template("Dumbbell Curls", "https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
    template("Hammer Curls", "https://www.youtube.com/watch?v=zC3nLlEvin4"),
    template("Preacher Curls", "https://www.youtube.com/watch?v=fIWP-FRFNU0"),
];

const LEGS_SHOULDERS: &[ExerciseTemplate] = &[
    template("Squats", "https://www.youtube.com/watch?v=Dy28eq2PjcM"),
    template("Deadlifts", "https://www.youtube.com/watch?v=ytGaGIn3SjE"),
    template("Leg Press", "https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
    template("Lunges", "https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
    template("Calf Raises", "https://www.youtube.com/watch?v=gwLzBJYoWlI"),
    template("Leg Curls", "https://www.youtube.com/watch?v=ELOCsoDSmrg"),
    template("Leg Extensions", "https://www.youtube.com/watch?v=YyvSfVjQeL0"),
    template("Shoulder Press", "https://www.youtube.com/watch?v=qEwKCR5JCog"),
    template("Lateral Raises", "https://www.youtube.com/watch?v=3VcKaXpzqRo"),
    template("Front Raises", "https://www.youtube.com/watch?v=qzaKUHI4Kv8"),
    template("Rear Delt Flyes", "https://www.youtube.com/watch?v=EA7u4Q_8HQ0"),
    template("Shrugs", "https://www.youtube.com/watch?v=cJRVVxmytaM"),
];

const PUSH: &[ExerciseTemplate] = &[
    template("Bench Press", "https://www.youtube.com/watch?v=rT7DgCr-3pg"),
    template("Incline Press", "https://www.youtube.com/watch?v=8iPEnn-ltC8"),
    template("Shoulder Press", "https://www.youtube.com/watch?v=qEwKCR5JCog"),
    template("Tricep Dips", "https://www.youtube.com/watch?v=6kALZikXxLc"),
    template("Lateral Raises", "https://www.youtube.com/watch?v=3VcKaXpzqRo"),
    template("Push-ups", "https://www.youtube.com/watch?v=IODxDxX7oi4"),
];

const PULL: &[ExerciseTemplate] = &[
    template("Pull-ups", "https://www.youtube.com/watch?v=eGo4IYlbE5g"),
    template("Rows", "https://www.youtube.com/watch?v=FWJR5Ve8bnQ"),
    template("Lat Pulldowns", "https://www.youtube.com/watch?v=CAwf7n6Luuc"),
    template("Barbell Curls", "https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
    template("Face Pulls", "https://www.youtube.com/watch?v=rep-qVOkqgk"),
    template("Shrugs", "https://www.youtube.com/watch?v=cJRVVxmytaM"),
];

const LEGS: &[ExerciseTemplate] = &[
    template("Squats", "https://www.youtube.com/watch?v=Dy28eq2PjcM"),
    template("Deadlifts", "https://www.youtube.com/watch?v=ytGaGIn3SjE"),
    template("Leg Press", "https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
    template("Lunges", "https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
    template("Calf Raises", "https://www.youtube.com/watch?v=gwLzBJYoWlI"),
    template("Leg Curls", "https://www.youtube.com/watch?v=ELOCsoDSmrg"),
];

const UPPER: &[ExerciseTemplate] = &[
    template("Bench Press", "https://www.youtube.com/watch?v=rT7DgCr-3pg"),
    template("Pull-ups", "https://www.youtube.com/watch?v=eGo4IYlbE5g"),
    template("Shoulder Press", "https://www.youtube.com/watch?v=qEwKCR5JCog"),
    template("Rows", "https://www.youtube.com/watch?v=FWJR5Ve8bnQ"),
    template("Curls", "https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
    template("Tricep Extensions", "https://www.youtube.com/watch?v=nRiJVZDpdL0"),
];

const LOWER: &[ExerciseTemplate] = &[
    template("Squats", "https://www.youtube.com/watch?v=Dy28eq2PjcM"),
    template("Deadlifts", "https://www.youtube.com/watch?v=ytGaGIn3SjE"),
    template("Lunges", "https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
    template("Calf Raises", "https://www.youtube.com/watch?v=gwLzBJYoWlI"),
    template("Leg Press", "https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
    template("Glute Bridges", "https://www.youtube.com/watch?v=OUgsJ8-Vi0E"),
];

const FULL_BODY: &[ExerciseTemplate] = &[
    template("Burpees", "https://www.youtube.com/watch?v=TU8QYVW0gDU"),
    template("Deadlifts", "https://www.youtube.com/watch?v=ytGaGIn3SjE"),
    template("Squats", "https://www.youtube.com/watch?v=Dy28eq2PjcM"),
    template("Push-ups", "https://www.youtube.com/watch?v=IODxDxX7oi4"),
    template("Pull-ups", "https://www.youtube.com/watch?v=eGo4IYlbE5g"),
    template("Plank", "https://www.youtube.com/watch?v=ASdvN_XEl_c"),
];

/// A common food with known macros, used as a logging shortcut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSuggestion {
    /// Food name
    pub name: &'static str,
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

const fn food(
    name: &'static str,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> FoodSuggestion {
    FoodSuggestion {
        name,
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Common foods offered as quick-add suggestions
pub const FOOD_SUGGESTIONS: &[FoodSuggestion] = &[
    food("Grilled Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    food("Brown Rice", 112.0, 2.6, 23.0, 0.9),
    food("Salmon Fillet", 208.0, 22.0, 0.0, 12.0),
    food("Greek Yogurt", 100.0, 17.0, 6.0, 0.4),
    food("Avocado", 160.0, 2.0, 9.0, 15.0),
    food("Sweet Potato", 112.0, 2.0, 26.0, 0.1),
    food("Quinoa", 222.0, 8.0, 39.0, 3.6),
    food("Eggs", 155.0, 13.0, 1.1, 11.0),
];
