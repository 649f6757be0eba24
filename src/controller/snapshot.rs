//! Read-only views handed to the view layer.

use crate::calendar::ChallengePeriod;
use crate::core::{ChallengePhase, ChallengeState, DailyRecord, LevelChange};
use crate::levels::{LevelDefinition, LevelTable};
use crate::persistence::StoreError;
use crate::stats::{ChallengeStats, CompletionTier};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Consistent picture of a challenge at one point in time.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Snapshot {
    pub phase: ChallengePhase,
    pub record: DailyRecord,
    pub start_date: Option<NaiveDate>,
    pub period: Option<ChallengePeriod>,
    pub current_day: u8,
    pub user_level: u8,
    pub level: LevelDefinition,
    pub last_update: Option<DateTime<Utc>>,
    pub stats: ChallengeStats,
    /// All 30 days have a non-zero count
    pub is_complete: bool,
}

impl Snapshot {
    pub(crate) fn of(state: Option<&ChallengeState>) -> Self {
        let fallback = DailyRecord::new();
        let record = state.map_or(fallback, |state| *state.record());
        let current_day = state.map_or(1, ChallengeState::current_day);
        let user_level = state.map_or(1, ChallengeState::user_level);
        let level = *LevelTable::by_level(user_level);
        let stats = ChallengeStats::compute(&record, current_day, &level);

        Self {
            phase: ChallengePhase::derive(state.is_some(), &record),
            record,
            start_date: state.map(ChallengeState::start_date),
            period: state.map(|state| ChallengePeriod::starting(state.start_date())),
            current_day,
            user_level,
            level,
            last_update: state.and_then(ChallengeState::last_update),
            is_complete: stats.completed_days == crate::core::CHALLENGE_DAYS,
            stats,
        }
    }

    /// Progress band of a zero-based day against the active target.
    pub fn tier(&self, index: usize) -> Option<CompletionTier> {
        self.record
            .get(index)
            .map(|count| CompletionTier::classify(count, self.level.daily_target))
    }

    /// Whether a zero-based day meets the active target.
    pub fn is_perfect(&self, index: usize) -> bool {
        self.record
            .get(index)
            .is_some_and(|count| count >= self.level.daily_target)
    }
}

/// Result of an accepted submission.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SubmitOutcome {
    pub snapshot: Snapshot,
    pub day_index: usize,
    /// The level rose with this update
    pub leveled_up: bool,
    /// The submitted count meets the target of the level active when it was entered
    pub met_target: bool,
    pub level_change: Option<LevelChange>,
    /// Set when the update could not be persisted
    #[serde(skip)]
    pub warning: Option<StoreError>,
}
