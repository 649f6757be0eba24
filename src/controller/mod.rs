//! Orchestration of challenge updates.
//!
//! `ChallengeController` is the single writer of a `ChallengeState`. Every
//! mutating call runs the same sequence to completion before returning:
//! validate, mutate the record, recompute derived fields, persist, then
//! hand back a fresh snapshot.
//!
//! # Example
//!
//! ```rust
//! use pushup_challenge::controller::ChallengeController;
//! use pushup_challenge::persistence::{FieldStore, MemoryBackend};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut controller = ChallengeController::new(FieldStore::new(MemoryBackend::new()));
//!
//! let snapshot = controller.initialize(today);
//! assert_eq!(snapshot.current_day, 1);
//!
//! let outcome = controller.submit_day(0, "12", today).unwrap();
//! assert!(outcome.met_target);
//! assert_eq!(outcome.snapshot.current_day, 2);
//! ```

pub mod error;
mod snapshot;
mod validation;

pub use error::ChallengeError;
pub use snapshot::{Snapshot, SubmitOutcome};
pub use validation::{parse_count, validate_submission, Submission};

use crate::core::{ChallengePhase, ChallengeState};
use crate::levels::{self, LevelTable};
use crate::persistence::{ChallengeStore, StoreError};
use chrono::{DateTime, NaiveDate, Utc};

/// Owns the challenge state and drives the store.
pub struct ChallengeController<S: ChallengeStore> {
    store: S,
    state: Option<ChallengeState>,
    last_warning: Option<StoreError>,
}

impl<S: ChallengeStore> ChallengeController<S> {
    /// Create an uninitialized controller. Nothing is read until
    /// [`initialize`](Self::initialize).
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: None,
            last_warning: None,
        }
    }

    /// Load stored state, starting the challenge on `today` if no start
    /// date was ever saved.
    pub fn initialize(&mut self, today: NaiveDate) -> Snapshot {
        let stored = self.store.load();
        let stored_level = stored.user_level;

        let state = match stored.clone().into_state(today) {
            Some(state) => state,
            None => {
                tracing::info!(%today, "No start date stored, starting challenge today");
                let state = ChallengeState::new(stored.record, today, stored.last_update, today);
                self.persist(&state);
                state
            }
        };

        if stored_level != state.user_level() {
            tracing::debug!(
                stored = stored_level,
                derived = state.user_level(),
                "Stored level disagrees with volume, using derived level"
            );
        }
        tracing::info!(
            start = %state.start_date(),
            day = state.current_day(),
            level = state.user_level(),
            "Challenge initialized"
        );

        self.state = Some(state);
        self.snapshot()
    }

    /// Record `raw` as the count for the zero-based `day_index`.
    ///
    /// Any day may be written or corrected at any time. On error the state
    /// is left untouched. A failed save is not an error: the outcome
    /// carries it as a warning and the in-memory state stays authoritative.
    pub fn submit_day(
        &mut self,
        day_index: usize,
        raw: &str,
        today: NaiveDate,
    ) -> Result<SubmitOutcome, ChallengeError> {
        let submission = validate_submission(day_index, raw)?;
        let now = now_millis();

        if self.state.is_none() {
            self.initialize(today);
        }
        let state = self.state.get_or_insert_with(|| ChallengeState::fresh(today));

        let previous_level = state.user_level();
        state.record_mut().set(submission.index, submission.count);
        state.set_last_update(now);
        state.recompute(today);

        let level_change = levels::detect_change(previous_level, state.user_level(), now);
        // Judged against the level in effect when the count was entered.
        let target = LevelTable::by_level(previous_level).daily_target;
        let met_target = submission.count >= target;

        tracing::debug!(
            day = submission.index + 1,
            count = submission.count,
            current_day = state.current_day(),
            "Day updated"
        );
        if let Some(change) = &level_change {
            tracing::info!(from = change.from, to = change.to, "Level changed");
        }

        let state = state.clone();
        let warning = self.persist(&state);

        Ok(SubmitOutcome {
            snapshot: self.snapshot(),
            day_index: submission.index,
            leveled_up: level_change.is_some_and(|change| change.is_level_up()),
            met_target,
            level_change,
            warning,
        })
    }

    /// Throw away all progress and start a new challenge on `today`.
    pub fn reset(&mut self, today: NaiveDate) -> Snapshot {
        let state = ChallengeState::fresh(today);
        self.persist(&state);
        self.state = Some(state);
        tracing::info!(%today, "Challenge reset");
        self.snapshot()
    }

    /// Current read-only view. Has no side effects.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.state.as_ref())
    }

    pub fn phase(&self) -> ChallengePhase {
        self.snapshot().phase
    }

    /// Outcome of the most recent save, if it failed.
    pub fn persistence_warning(&self) -> Option<&StoreError> {
        self.last_warning.as_ref()
    }

    pub fn state(&self) -> Option<&ChallengeState> {
        self.state.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, state: &ChallengeState) -> Option<StoreError> {
        self.last_warning = match self.store.save(state) {
            Ok(()) => None,
            Err(error) => {
                tracing::warn!(%error, "Failed to persist challenge, keeping in-memory state");
                Some(error)
            }
        };
        self.last_warning.clone()
    }
}

/// Current instant at the millisecond precision the store keeps.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
