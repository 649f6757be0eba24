//! Pushup Challenge: a pure functional progress core for a 30-day challenge
//!
//! The crate follows a "pure core, imperative shell" layout. Day pointers,
//! levels and statistics are pure functions of the daily record; only the
//! controller reads storage and stamps update times.
//!
//! # Core Concepts
//!
//! - **Record**: thirty daily counts, day 1 at index 0
//! - **Day pointer**: where the user should log next, from elapsed calendar days
//!   and the first unfilled day
//! - **Levels**: seven tiers unlocked by cumulative volume, each with a daily target
//! - **Stats**: streaks, averages and progress against the active level
//! - **Store**: four flat key/value fields, each loadable on its own
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
//! controller.initialize(today);
//!
//! let outcome = controller.submit_day(0, "120", today).unwrap();
//! assert!(outcome.leveled_up);
//! assert_eq!(outcome.snapshot.level.name, "Rookie");
//! assert_eq!(outcome.snapshot.stats.pushups_till_next_level, 180);
//! ```

pub mod calendar;
pub mod config;
pub mod controller;
pub mod core;
pub mod levels;
pub mod persistence;
pub mod stats;

// Re-export commonly used types
pub use controller::{ChallengeController, ChallengeError, Snapshot, SubmitOutcome};
pub use core::{ChallengePhase, ChallengeState, DailyRecord, State};
pub use levels::{LevelDefinition, LevelTable};
pub use persistence::{ChallengeStore, FieldStore, StoreError};
