// ABOUTME: Consecutive-training-day streak calculation over sparse dates
// ABOUTME: Gap-tolerant runs with an explicit reference date for "today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog Contributors

//! Training streaks.
//!
//! Streaks operate on the distinct set of calendar days with at least one
//! logged workout; logging twice on one day does not count twice. Two
//! adjacent training days up to [`MAX_RUN_GAP_DAYS`] apart belong to the
//! same run, so a single rest day never breaks a streak. The current streak
//! is the run ending at the most recent training day, and it only counts
//! while that day is within [`CURRENT_STREAK_GRACE_DAYS`] of the reference
//! date — afterwards it silently reads as zero, with no state recording
//! that it broke.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use liftlog_core::models::Workout;

/// Largest gap (in days) between adjacent training days that still counts
/// as one run. Two means back-to-back or every-other-day training both
/// extend the streak.
pub const MAX_RUN_GAP_DAYS: i64 = 2;

/// Days the most recent training day may trail the reference date before
/// the current streak reads as zero.
pub const CURRENT_STREAK_GRACE_DAYS: i64 = 1;

/// Current and longest streak, both counted in training days
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakSummary {
    /// Length of the run ending at the most recent training day, or zero
    /// once that day falls outside the grace window
    pub current: u32,
    /// Length of the longest run across the whole history
    pub longest: u32,
}

/// Compute streaks from a set of workout dates.
///
/// Input order is irrelevant and duplicates are expected; the calculation
/// dedups and sorts internally. `reference` is the caller's "today".
#[must_use]
pub fn streak_summary(dates: &[NaiveDate], reference: NaiveDate) -> StreakSummary {
    let mut distinct = dates.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let Some(&most_recent) = distinct.last() else {
        return StreakSummary::default();
    };

    let mut longest: u32 = 1;
    let mut run: u32 = 1;
    for pair in distinct.windows(2) {
        let gap = pair[1].signed_duration_since(pair[0]).num_days();
        if gap <= MAX_RUN_GAP_DAYS {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);

    // `run` ends the loop holding the length of the final run, the one
    // containing the most recent training day.
    let days_since_last = reference.signed_duration_since(most_recent).num_days();
    let current = if days_since_last <= CURRENT_STREAK_GRACE_DAYS {
        run
    } else {
        0
    };

    StreakSummary { current, longest }
}

/// Streaks for a workout collection: extracts the dates and delegates to
/// [`streak_summary`].
#[must_use]
pub fn workout_streaks(workouts: &[Workout], reference: NaiveDate) -> StreakSummary {
    let dates: Vec<NaiveDate> = workouts.iter().map(|workout| workout.date).collect();
    streak_summary(&dates, reference)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duplicate_dates_count_once() {
        let reference = date(2024, 3, 10);
        let dates = [date(2024, 3, 10), date(2024, 3, 10), date(2024, 3, 9)];
        let summary = streak_summary(&dates, reference);
        assert_eq!(summary, StreakSummary { current: 2, longest: 2 });
    }

    #[test]
    fn future_dated_workout_still_counts_as_current() {
        // A workout logged for tomorrow keeps the streak alive today.
        let reference = date(2024, 3, 10);
        let dates = [date(2024, 3, 11)];
        let summary = streak_summary(&dates, reference);
        assert_eq!(summary, StreakSummary { current: 1, longest: 1 });
    }
}
