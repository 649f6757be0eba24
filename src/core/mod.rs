//! Core challenge types.
//!
//! This module contains the plain data of a challenge:
//! - The fixed 30-day record
//! - The controller-owned challenge state
//! - Lifecycle phases via the `State` trait
//! - Level change records
//!
//! Everything here is pure data plus pure derivations; reading the clock
//! and touching storage happen in the controller.

mod challenge;
mod phase;
mod record;
mod state;
mod transition;

pub use challenge::ChallengeState;
pub use phase::ChallengePhase;
pub use record::{DailyRecord, CHALLENGE_DAYS};
pub use state::State;
pub use transition::LevelChange;
