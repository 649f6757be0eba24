//! Progress bands for a single day's count.

use serde::{Deserialize, Serialize};

/// How far one day's count got towards the active daily target.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::stats::CompletionTier;
///
/// assert_eq!(CompletionTier::classify(0, 10), CompletionTier::NotStarted);
/// assert_eq!(CompletionTier::classify(6, 10), CompletionTier::Halfway);
/// assert_eq!(CompletionTier::classify(14, 10), CompletionTier::Complete);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CompletionTier {
    NotStarted,
    /// Under a quarter of the target
    Low,
    /// Under half
    Building,
    /// Under three quarters
    Halfway,
    /// Short of the target
    Close,
    Complete,
}

impl CompletionTier {
    pub fn classify(count: u32, daily_target: u32) -> Self {
        if count == 0 {
            return Self::NotStarted;
        }
        if daily_target == 0 || count >= daily_target {
            return Self::Complete;
        }
        // Compare count / target against quarter marks without floats.
        let quarters = u64::from(count) * 4;
        let target = u64::from(daily_target);
        if quarters < target {
            Self::Low
        } else if quarters < 2 * target {
            Self::Building
        } else if quarters < 3 * target {
            Self::Halfway
        } else {
            Self::Close
        }
    }

    /// Rounded percentage of the target, capped at 100.
    pub fn percent(count: u32, daily_target: u32) -> u8 {
        if daily_target == 0 {
            return 100;
        }
        let target = u64::from(daily_target);
        let percent = (u64::from(count) * 200 + target) / (2 * target);
        percent.min(100) as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::Complete => "Complete!",
            Self::Low | Self::Building | Self::Halfway | Self::Close => "In progress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_quarter_marks() {
        assert_eq!(CompletionTier::classify(24, 100), CompletionTier::Low);
        assert_eq!(CompletionTier::classify(25, 100), CompletionTier::Building);
        assert_eq!(CompletionTier::classify(49, 100), CompletionTier::Building);
        assert_eq!(CompletionTier::classify(50, 100), CompletionTier::Halfway);
        assert_eq!(CompletionTier::classify(75, 100), CompletionTier::Close);
        assert_eq!(CompletionTier::classify(99, 100), CompletionTier::Close);
        assert_eq!(CompletionTier::classify(100, 100), CompletionTier::Complete);
    }

    #[test]
    fn percent_is_rounded_and_capped() {
        assert_eq!(CompletionTier::percent(0, 25), 0);
        assert_eq!(CompletionTier::percent(1, 3), 33);
        assert_eq!(CompletionTier::percent(2, 3), 67);
        assert_eq!(CompletionTier::percent(80, 25), 100);
    }

    #[test]
    fn labels_match_tiers() {
        assert_eq!(CompletionTier::NotStarted.label(), "Not started");
        assert_eq!(CompletionTier::Close.label(), "In progress");
        assert_eq!(CompletionTier::Complete.label(), "Complete!");
    }
}
