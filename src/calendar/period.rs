//! The calendar window of a challenge.

use super::day::elapsed_days;
use crate::core::CHALLENGE_DAYS;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// First and last calendar dates of a challenge, both inclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChallengePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ChallengePeriod {
    pub fn starting(start: NaiveDate) -> Self {
        let end = start
            .checked_add_days(Days::new(CHALLENGE_DAYS as u64 - 1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar days left in the window, counting `today`.
    pub fn days_remaining(&self, today: NaiveDate) -> u32 {
        let elapsed = elapsed_days(self.start, today).max(1);
        (CHALLENGE_DAYS as i64 - elapsed + 1).max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_spans_thirty_days() {
        let period = ChallengePeriod::starting(date(2024, 1, 15));
        assert_eq!(period.end, date(2024, 2, 13));
        assert!(period.contains(date(2024, 1, 15)));
        assert!(period.contains(date(2024, 2, 13)));
        assert!(!period.contains(date(2024, 2, 14)));
        assert!(!period.contains(date(2024, 1, 14)));
    }

    #[test]
    fn days_remaining_counts_down() {
        let period = ChallengePeriod::starting(date(2024, 1, 1));
        assert_eq!(period.days_remaining(date(2023, 12, 25)), 30);
        assert_eq!(period.days_remaining(date(2024, 1, 1)), 30);
        assert_eq!(period.days_remaining(date(2024, 1, 30)), 1);
        assert_eq!(period.days_remaining(date(2024, 1, 31)), 0);
        assert_eq!(period.days_remaining(date(2024, 6, 1)), 0);
    }
}
