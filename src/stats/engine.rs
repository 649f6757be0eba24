//! Aggregates derived from the daily record.

use crate::core::{DailyRecord, CHALLENGE_DAYS};
use crate::levels::{LevelDefinition, LevelTable};
use serde::{Deserialize, Serialize};

/// Read-only statistics for one challenge, evaluated against the active level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ChallengeStats {
    pub total_volume: u64,
    pub completed_days: usize,
    /// Days (out of all 30) meeting the active level's target
    pub perfect_days: usize,
    pub avg_per_day: u64,
    pub best_day: u32,
    pub remaining_today: u32,
    /// Consecutive complete days from day 1 up to the current day
    pub current_streak: usize,
    /// Consecutive on-target days from day 1 up to the current day
    pub perfect_streak: usize,
    /// Longest run of complete days anywhere in the record
    pub best_streak: usize,
    pub daily_target: u32,
    pub has_next_level: bool,
    pub pushups_till_next_level: u64,
    pub overall_progress_percent: u8,
}

impl ChallengeStats {
    /// Compute every aggregate in one pass over the inputs.
    pub fn compute(record: &DailyRecord, current_day: u8, level: &LevelDefinition) -> Self {
        let target = level.daily_target;
        let total_volume = record.total();
        let completed_days = record.completed_days();
        let next_level = LevelTable::next(level.level);

        Self {
            total_volume,
            completed_days,
            perfect_days: record
                .values()
                .iter()
                .filter(|&&count| count >= target)
                .count(),
            avg_per_day: rounded_ratio(total_volume, completed_days as u64),
            best_day: record.best_day(),
            remaining_today: remaining_today(record, current_day, target),
            current_streak: streak_from_day_one(record, current_day, |count| count > 0),
            perfect_streak: streak_from_day_one(record, current_day, |count| count >= target),
            best_streak: longest_run(record),
            daily_target: target,
            has_next_level: next_level.is_some(),
            pushups_till_next_level: next_level
                .map_or(0, |next| next.requirement.saturating_sub(total_volume)),
            overall_progress_percent: progress_percent(total_volume, target),
        }
    }
}

/// Half-up rounding of `numerator / denominator`, 0 for an empty denominator.
fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

fn remaining_today(record: &DailyRecord, current_day: u8, target: u32) -> u32 {
    if !(1..=CHALLENGE_DAYS as u8).contains(&current_day) {
        return 0;
    }
    record
        .get(usize::from(current_day) - 1)
        .map_or(0, |count| target.saturating_sub(count))
}

fn streak_from_day_one<F>(record: &DailyRecord, current_day: u8, qualifies: F) -> usize
where
    F: Fn(u32) -> bool,
{
    record
        .values()
        .iter()
        .take(usize::from(current_day))
        .take_while(|&&count| qualifies(count))
        .count()
}

fn longest_run(record: &DailyRecord) -> usize {
    let mut best = 0;
    let mut run = 0;
    for &count in record.values() {
        run = if count > 0 { run + 1 } else { 0 };
        best = best.max(run);
    }
    best
}

fn progress_percent(total_volume: u64, daily_target: u32) -> u8 {
    let goal = CHALLENGE_DAYS as u64 * u64::from(daily_target);
    rounded_ratio(total_volume.saturating_mul(100), goal).min(100) as u8
}
