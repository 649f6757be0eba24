//! The four persisted fields and their encodings.
//!
//! Field names and encodings are shared with existing stored data and
//! must not change.

use super::backend::KeyValueBackend;
use super::error::StoreError;
use super::ChallengeStore;
use crate::core::{ChallengeState, DailyRecord};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const RECORD_KEY: &str = "pushupData";
pub const LEVEL_KEY: &str = "userLevel";
pub const LAST_UPDATE_KEY: &str = "lastUpdateTime";
pub const START_DATE_KEY: &str = "challengeStartDate";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields as found in storage, each already replaced by its default when
/// missing or malformed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StoredChallenge {
    pub record: DailyRecord,
    pub user_level: u8,
    pub last_update: Option<DateTime<Utc>>,
    pub start_date: Option<NaiveDate>,
}

impl StoredChallenge {
    /// Rebuild a challenge state, re-deriving cached fields for `today`.
    ///
    /// Returns `None` when no start date was stored.
    pub fn into_state(self, today: NaiveDate) -> Option<ChallengeState> {
        let start_date = self.start_date?;
        Some(ChallengeState::new(
            self.record,
            start_date,
            self.last_update,
            today,
        ))
    }
}

pub fn encode_record(record: &DailyRecord) -> Result<String, StoreError> {
    Ok(serde_json::to_string(record)?)
}

pub fn decode_record(raw: &str) -> Option<DailyRecord> {
    let values: Vec<i64> = serde_json::from_str(raw).ok()?;
    DailyRecord::from_stored(&values)
}

pub fn decode_level(raw: &str) -> Option<u8> {
    raw.trim().parse().ok().filter(|&level| level >= 1)
}

pub fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

pub fn decode_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = raw.trim().parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}

pub fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts a plain date or a full RFC 3339 timestamp.
///
/// Timestamps are the instant of local midnight on the start date, so they
/// are read back as a calendar date in the local time zone.
pub fn decode_date(raw: &str) -> Option<NaiveDate> {
    decode_date_in(raw, &Local)
}

/// [`decode_date`] with timestamps resolved in `zone`.
pub fn decode_date_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|at| at.with_timezone(zone).date_naive())
    })
}

/// `ChallengeStore` that maps a challenge onto four independent keys of a
/// flat key/value backend.
#[derive(Debug, Default)]
pub struct FieldStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> FieldStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and decode one key. Any failure is logged and yields `None`.
    fn read_field<T>(&self, key: &str, decode: impl Fn(&str) -> Option<T>) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to read stored field, using default");
                return None;
            }
        };
        let value = decode(&raw);
        if value.is_none() {
            tracing::warn!(key, raw = %raw, "Malformed stored field, using default");
        }
        value
    }
}

impl<B: KeyValueBackend> ChallengeStore for FieldStore<B> {
    fn load(&self) -> StoredChallenge {
        StoredChallenge {
            record: self.read_field(RECORD_KEY, decode_record).unwrap_or_default(),
            user_level: self.read_field(LEVEL_KEY, decode_level).unwrap_or(1),
            last_update: self.read_field(LAST_UPDATE_KEY, decode_timestamp),
            start_date: self.read_field(START_DATE_KEY, decode_date),
        }
    }

    fn save(&mut self, state: &ChallengeState) -> Result<(), StoreError> {
        // Every field is attempted; the first failure is reported.
        let results = [
            encode_record(state.record())
                .and_then(|encoded| self.backend.set(RECORD_KEY, &encoded)),
            self.backend
                .set(LEVEL_KEY, &state.user_level().to_string()),
            match state.last_update() {
                Some(at) => self.backend.set(LAST_UPDATE_KEY, &encode_timestamp(at)),
                None => self.backend.remove(LAST_UPDATE_KEY),
            },
            self.backend
                .set(START_DATE_KEY, &encode_date(state.start_date())),
        ];
        results.into_iter().collect()
    }
}
