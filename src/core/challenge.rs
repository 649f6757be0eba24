//! The challenge state owned by the controller.

use super::record::DailyRecord;
use crate::calendar;
use crate::levels;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Durable state of one challenge plus its cached derived fields.
///
/// `current_day` and `user_level` are never assigned directly: they are
/// re-derived from `record`, `start_date` and the caller's `today` by
/// [`ChallengeState::recompute`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChallengeState {
    record: DailyRecord,
    start_date: NaiveDate,
    current_day: u8,
    user_level: u8,
    last_update: Option<DateTime<Utc>>,
}

impl ChallengeState {
    /// Build a state and derive its cached fields for `today`.
    pub fn new(
        record: DailyRecord,
        start_date: NaiveDate,
        last_update: Option<DateTime<Utc>>,
        today: NaiveDate,
    ) -> Self {
        let mut state = Self {
            record,
            start_date,
            current_day: 1,
            user_level: 1,
            last_update,
        };
        state.recompute(today);
        state
    }

    /// A brand new challenge starting on `today`.
    pub fn fresh(today: NaiveDate) -> Self {
        Self::new(DailyRecord::new(), today, None, today)
    }

    /// Re-derive the day pointer and level from the record.
    pub fn recompute(&mut self, today: NaiveDate) {
        self.current_day = calendar::current_day(self.start_date, &self.record, today);
        self.user_level = levels::level_for_record(&self.record);
    }

    pub fn record(&self) -> &DailyRecord {
        &self.record
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn current_day(&self) -> u8 {
        self.current_day
    }

    pub fn user_level(&self) -> u8 {
        self.user_level
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub(crate) fn record_mut(&mut self) -> &mut DailyRecord {
        &mut self.record
    }

    pub(crate) fn set_last_update(&mut self, at: DateTime<Utc>) {
        self.last_update = Some(at);
    }
}
