//! Lifecycle phase of a challenge instance.

use super::record::DailyRecord;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Where a challenge stands: `Uninitialized → Active ⇄ Complete`.
///
/// `Complete` is re-evaluated on every snapshot. Editing a filled day back
/// to zero moves the challenge back to `Active`.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::core::{ChallengePhase, DailyRecord, State};
///
/// let record = DailyRecord::from([5; 30]);
/// let phase = ChallengePhase::derive(true, &record);
/// assert_eq!(phase, ChallengePhase::Complete);
/// assert!(phase.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ChallengePhase {
    Uninitialized,
    Active,
    Complete,
}

impl ChallengePhase {
    /// Derive the phase from whether a start date exists and the record.
    pub fn derive(started: bool, record: &DailyRecord) -> Self {
        if !started {
            Self::Uninitialized
        } else if record.is_complete() {
            Self::Complete
        } else {
            Self::Active
        }
    }
}

impl State for ChallengePhase {
    fn name(&self) -> &str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::Active => "Active",
            Self::Complete => "Complete",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(ChallengePhase::Uninitialized.name(), "Uninitialized");
        assert_eq!(ChallengePhase::Active.name(), "Active");
        assert_eq!(ChallengePhase::Complete.name(), "Complete");
    }

    #[test]
    fn only_complete_is_final() {
        assert!(!ChallengePhase::Uninitialized.is_final());
        assert!(!ChallengePhase::Active.is_final());
        assert!(ChallengePhase::Complete.is_final());
    }

    #[test]
    fn unstarted_challenge_is_uninitialized_even_with_data() {
        let record = DailyRecord::from([1; 30]);
        assert_eq!(
            ChallengePhase::derive(false, &record),
            ChallengePhase::Uninitialized
        );
    }

    #[test]
    fn started_challenge_with_gap_is_active() {
        let mut values = [3; 30];
        values[17] = 0;
        let record = DailyRecord::from(values);
        assert_eq!(ChallengePhase::derive(true, &record), ChallengePhase::Active);
        assert_eq!(
            ChallengePhase::derive(true, &DailyRecord::new()),
            ChallengePhase::Active
        );
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&ChallengePhase::Complete).unwrap();
        let deserialized: ChallengePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ChallengePhase::Complete);
    }
}
