//! Level transition records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single change in the active level.
///
/// Changes are immutable values. Because a day can be corrected downward,
/// a change may lower the level as well as raise it.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::core::LevelChange;
/// use chrono::Utc;
///
/// let change = LevelChange {
///     from: 1,
///     to: 2,
///     timestamp: Utc::now(),
/// };
/// assert!(change.is_level_up());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LevelChange {
    /// Level before the update
    pub from: u8,
    /// Level after the update
    pub to: u8,
    /// When the update was applied
    pub timestamp: DateTime<Utc>,
}

impl LevelChange {
    /// A strictly increasing change.
    pub fn is_level_up(&self) -> bool {
        self.to > self.from
    }

    pub fn is_level_down(&self) -> bool {
        self.to < self.from
    }
}
