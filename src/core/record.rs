//! The fixed 30-slot record of daily counts.

use serde::{Deserialize, Serialize};

/// Number of days in a challenge.
pub const CHALLENGE_DAYS: usize = 30;

/// Ordered counts for day 1..=30, stored at index 0..=29.
///
/// The record never grows or shrinks. A day is complete when its count is
/// non-zero.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::core::DailyRecord;
///
/// let mut values = [0; 30];
/// values[0] = 12;
/// values[1] = 8;
/// let record = DailyRecord::from(values);
///
/// assert_eq!(record.total(), 20);
/// assert_eq!(record.completed_days(), 2);
/// assert_eq!(record.next_incomplete_day(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRecord([u32; CHALLENGE_DAYS]);

impl Default for DailyRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u32; CHALLENGE_DAYS]> for DailyRecord {
    fn from(values: [u32; CHALLENGE_DAYS]) -> Self {
        Self(values)
    }
}

impl DailyRecord {
    /// Create an empty record (all days zero).
    pub fn new() -> Self {
        Self([0; CHALLENGE_DAYS])
    }

    /// Build a record from arbitrary stored integers.
    ///
    /// Returns `None` unless there are exactly 30 values, all non-negative
    /// and within `u32`.
    pub fn from_stored(values: &[i64]) -> Option<Self> {
        if values.len() != CHALLENGE_DAYS {
            return None;
        }
        let mut slots = [0; CHALLENGE_DAYS];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = u32::try_from(*value).ok()?;
        }
        Some(Self(slots))
    }

    /// Count for a zero-based day index.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Overwrite the count for a zero-based day index.
    ///
    /// Returns `false` (and leaves the record untouched) when the index is
    /// outside the challenge.
    pub(crate) fn set(&mut self, index: usize, value: u32) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn values(&self) -> &[u32; CHALLENGE_DAYS] {
        &self.0
    }

    /// Cumulative volume across all days.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&count| u64::from(count)).sum()
    }

    /// Number of days with a non-zero count.
    pub fn completed_days(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }

    /// Smallest 1-based day whose count is zero, or 31 when every day is filled.
    pub fn next_incomplete_day(&self) -> usize {
        self.0
            .iter()
            .position(|&count| count == 0)
            .map_or(CHALLENGE_DAYS + 1, |index| index + 1)
    }

    /// Largest single-day count.
    pub fn best_day(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.completed_days() == CHALLENGE_DAYS
    }
}
