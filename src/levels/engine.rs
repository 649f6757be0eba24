//! Level derivation from cumulative volume.

use super::table::LevelTable;
use crate::core::{DailyRecord, LevelChange};
use chrono::{DateTime, Utc};

/// Active level for a record. A pure function of total volume, so a
/// downward edit can lower the level again.
pub fn level_for_record(record: &DailyRecord) -> u8 {
    LevelTable::level_for(record.total()).level
}

/// Compare levels before and after a mutation.
///
/// Returns `None` when the level is unchanged.
pub fn detect_change(previous: u8, current: u8, at: DateTime<Utc>) -> Option<LevelChange> {
    (previous != current).then_some(LevelChange {
        from: previous,
        to: current,
        timestamp: at,
    })
}
