//! Day pointer derivation.

use crate::core::{DailyRecord, CHALLENGE_DAYS};
use chrono::NaiveDate;

/// Calendar days since `start`, counting the start date itself as day 1.
///
/// Zero or negative when `start` lies in the future.
pub fn elapsed_days(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days() + 1
}

/// The active day (1..=30) for a record on `today`.
///
/// The pointer advances with the calendar so skipped days stay visible,
/// but never sits past the first unfilled day while still inside the
/// 30-day window. Past the window it returns to the first gap.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::calendar::current_day;
/// use pushup_challenge::core::DailyRecord;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// let mut values = [0; 30];
/// values[0] = 10;
/// assert_eq!(current_day(start, &DailyRecord::from(values), today), 5);
/// ```
pub fn current_day(start: NaiveDate, record: &DailyRecord, today: NaiveDate) -> u8 {
    let elapsed = elapsed_days(start, today);
    if elapsed <= 0 {
        return 1;
    }

    let completed = record.completed_days();
    if completed == 0 {
        return 1;
    }
    if completed == CHALLENGE_DAYS {
        return CHALLENGE_DAYS as u8;
    }

    let next_incomplete = record.next_incomplete_day();
    let day = if elapsed <= CHALLENGE_DAYS as i64 {
        (elapsed as usize).max(next_incomplete).clamp(1, CHALLENGE_DAYS)
    } else if next_incomplete <= CHALLENGE_DAYS {
        next_incomplete
    } else {
        completed + 1
    };
    day as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    fn after(days: u64) -> NaiveDate {
        start().checked_add_days(Days::new(days)).unwrap()
    }

    fn filled(days: &[usize]) -> DailyRecord {
        let mut values = [0; 30];
        for &day in days {
            values[day - 1] = 10;
        }
        DailyRecord::from(values)
    }

    #[test]
    fn start_date_is_day_one() {
        assert_eq!(elapsed_days(start(), start()), 1);
        assert_eq!(elapsed_days(start(), after(29)), 30);
    }

    #[test]
    fn empty_record_stays_on_day_one() {
        assert_eq!(current_day(start(), &DailyRecord::new(), start()), 1);
        assert_eq!(current_day(start(), &DailyRecord::new(), after(12)), 1);
        assert_eq!(current_day(start(), &DailyRecord::new(), after(90)), 1);
    }

    #[test]
    fn future_start_date_is_day_one() {
        let record = filled(&[1, 2]);
        assert_eq!(current_day(after(3), &record, start()), 1);
    }

    #[test]
    fn pointer_moves_to_next_gap_after_logging() {
        assert_eq!(current_day(start(), &filled(&[1]), start()), 2);
        assert_eq!(current_day(start(), &filled(&[1, 2, 3]), after(1)), 4);
    }

    #[test]
    fn pointer_follows_calendar_when_days_are_skipped() {
        // Day 1 logged, now on calendar day 6
        assert_eq!(current_day(start(), &filled(&[1]), after(5)), 6);
    }

    #[test]
    fn pointer_ignores_later_entries_when_finding_gap() {
        assert_eq!(current_day(start(), &filled(&[1, 3, 4]), start()), 2);
    }

    #[test]
    fn completed_challenge_is_day_thirty() {
        let all: Vec<usize> = (1..=30).collect();
        assert_eq!(current_day(start(), &filled(&all), start()), 30);
        assert_eq!(current_day(start(), &filled(&all), after(100)), 30);
    }

    #[test]
    fn last_calendar_day_is_clamped() {
        assert_eq!(current_day(start(), &filled(&[1]), after(29)), 30);
    }

    #[test]
    fn past_window_returns_to_first_gap() {
        assert_eq!(current_day(start(), &filled(&[1, 2, 5]), after(45)), 3);
    }

    #[test]
    fn calculation_is_idempotent() {
        let record = filled(&[1, 2, 7]);
        let first = current_day(start(), &record, after(9));
        let second = current_day(start(), &record, after(9));
        assert_eq!(first, second);
    }
}
