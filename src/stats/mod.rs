//! Statistics derived from the daily record.
//!
//! All functions here are pure: the same record, day pointer and level
//! always produce the same aggregates.

mod engine;
mod tier;

pub use engine::ChallengeStats;
pub use tier::CompletionTier;
