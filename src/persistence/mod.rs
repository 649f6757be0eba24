//! Durable storage of a challenge.
//!
//! The controller only sees the `ChallengeStore` port. The provided
//! implementation, `FieldStore`, spreads a challenge over four flat keys
//! of any `KeyValueBackend`:
//!
//! | key | encoding |
//! |---|---|
//! | `pushupData` | JSON array of 30 integers |
//! | `userLevel` | integer string |
//! | `lastUpdateTime` | epoch milliseconds |
//! | `challengeStartDate` | `YYYY-MM-DD` |
//!
//! Loading never fails: a missing or malformed field is replaced by its
//! default on its own, so a partially written store still loads.

mod backend;
pub mod error;
mod fields;

pub use backend::{JsonFileBackend, KeyValueBackend, MemoryBackend};
pub use error::StoreError;
pub use fields::{
    FieldStore, StoredChallenge, LAST_UPDATE_KEY, LEVEL_KEY, RECORD_KEY, START_DATE_KEY,
};

use crate::core::ChallengeState;

/// Load/save port used by the controller.
pub trait ChallengeStore {
    /// Read every field, substituting defaults for anything unusable.
    fn load(&self) -> StoredChallenge;

    fn save(&mut self, state: &ChallengeState) -> Result<(), StoreError>;
}
