//! Property-based tests for the challenge core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{DateTime, Days, NaiveDate};
use pushup_challenge::calendar::current_day;
use pushup_challenge::core::{ChallengeState, DailyRecord};
use pushup_challenge::levels::{level_for_record, LevelTable};
use pushup_challenge::persistence::{ChallengeStore, FieldStore, MemoryBackend};
use pushup_challenge::stats::ChallengeStats;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_record()(values in prop::array::uniform30(
        prop_oneof![Just(0u32), 0u32..300]
    )) -> DailyRecord {
        DailyRecord::from(values)
    }
}

prop_compose! {
    fn arbitrary_date()(offset in 0u64..20_000) -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    }
}

proptest! {
    #[test]
    fn level_for_is_maximal(total in 0u64..5_000) {
        let level = LevelTable::level_for(total);
        prop_assert!(level.requirement <= total);
        for higher in LevelTable::all().iter().filter(|l| l.level > level.level) {
            prop_assert!(higher.requirement > total);
        }
    }

    #[test]
    fn current_day_is_in_range_and_idempotent(
        record in arbitrary_record(),
        start in arbitrary_date(),
        offset in -40i64..120,
    ) {
        let today = start + chrono::Duration::days(offset);
        let first = current_day(start, &record, today);
        let second = current_day(start, &record, today);
        prop_assert_eq!(first, second);
        prop_assert!((1..=30).contains(&first));
    }

    #[test]
    fn current_day_never_passes_first_gap_inside_window(
        record in arbitrary_record(),
        start in arbitrary_date(),
        offset in 0i64..30,
    ) {
        let today = start + chrono::Duration::days(offset);
        let day = usize::from(current_day(start, &record, today));
        let completed = record.completed_days();
        if completed > 0 && completed < 30 {
            prop_assert!(day >= record.next_incomplete_day());
        }
    }

    #[test]
    fn perfect_streak_never_exceeds_current_streak(
        record in arbitrary_record(),
        day in 1u8..=30,
        level in 1u8..=7,
    ) {
        let stats = ChallengeStats::compute(&record, day, LevelTable::by_level(level));
        prop_assert!(stats.perfect_streak <= stats.current_streak);
        prop_assert!(stats.current_streak <= stats.best_streak);
        prop_assert!(stats.overall_progress_percent <= 100);
        prop_assert!(stats.perfect_days <= stats.completed_days);
    }

    #[test]
    fn level_is_a_function_of_total_volume(record in arbitrary_record()) {
        let level = level_for_record(&record);
        prop_assert_eq!(level, LevelTable::level_for(record.total()).level);
    }

    #[test]
    fn save_then_load_reproduces_state(
        record in arbitrary_record(),
        start in arbitrary_date(),
        offset in 0i64..60,
        millis in prop::option::of(0i64..4_000_000_000_000),
    ) {
        let today = start + chrono::Duration::days(offset);
        let last_update = millis.and_then(DateTime::from_timestamp_millis);
        let state = ChallengeState::new(record, start, last_update, today);

        let mut store = FieldStore::new(MemoryBackend::new());
        store.save(&state).unwrap();
        let loaded = store.load().into_state(today);

        prop_assert_eq!(loaded, Some(state));
    }
}
