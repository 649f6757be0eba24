//! Errors returned to callers of the controller.

use thiserror::Error;

/// Reasons a submission is rejected. The challenge state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// The entered count is not a non-negative integer
    #[error("Invalid count {input:?}: enter a whole number of zero or more")]
    InvalidCount { input: String },

    /// The day index is outside 0..=29 (a caller bug, e.g. a stale selection)
    #[error("Day index {index} is outside the challenge (expected 0..=29)")]
    DayOutOfRange { index: usize },
}

impl ChallengeError {
    /// Lower sorts first when several problems are reported at once.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Self::DayOutOfRange { .. } => 0,
            Self::InvalidCount { .. } => 1,
        }
    }
}
