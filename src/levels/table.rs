//! Static table of experience levels.

use serde::Serialize;

/// One tier of the level ladder.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct LevelDefinition {
    pub level: u8,
    pub name: &'static str,
    /// Cumulative volume needed to reach this level
    pub requirement: u64,
    pub daily_target: u32,
    /// Presentation hint for the view layer
    pub display_tag: &'static str,
}

static LEVELS: [LevelDefinition; 7] = [
    LevelDefinition {
        level: 1,
        name: "Beginner",
        requirement: 0,
        daily_target: 10,
        display_tag: "gray",
    },
    LevelDefinition {
        level: 2,
        name: "Rookie",
        requirement: 100,
        daily_target: 25,
        display_tag: "blue",
    },
    LevelDefinition {
        level: 3,
        name: "Intermediate",
        requirement: 300,
        daily_target: 50,
        display_tag: "green",
    },
    LevelDefinition {
        level: 4,
        name: "Advanced",
        requirement: 600,
        daily_target: 75,
        display_tag: "purple",
    },
    LevelDefinition {
        level: 5,
        name: "Expert",
        requirement: 1000,
        daily_target: 100,
        display_tag: "amber",
    },
    LevelDefinition {
        level: 6,
        name: "Master",
        requirement: 1500,
        daily_target: 150,
        display_tag: "red",
    },
    LevelDefinition {
        level: 7,
        name: "Elite",
        requirement: 2000,
        daily_target: 200,
        display_tag: "fuchsia",
    },
];

/// Read-only access to the level ladder.
///
/// # Example
///
/// ```rust
/// use pushup_challenge::levels::LevelTable;
///
/// let level = LevelTable::level_for(105);
/// assert_eq!(level.level, 2);
/// assert_eq!(LevelTable::next(level.level).map(|l| l.requirement), Some(300));
/// ```
pub struct LevelTable;

impl LevelTable {
    pub fn all() -> &'static [LevelDefinition] {
        &LEVELS
    }

    /// Highest level whose requirement is covered by `total_volume`.
    pub fn level_for(total_volume: u64) -> &'static LevelDefinition {
        LEVELS
            .iter()
            .rev()
            .find(|definition| definition.requirement <= total_volume)
            .unwrap_or(&LEVELS[0])
    }

    /// The level after `level`, if any.
    pub fn next(level: u8) -> Option<&'static LevelDefinition> {
        LEVELS.iter().find(|definition| definition.level > level)
    }

    /// Definition for a level number. Unknown numbers fall back to level 1.
    pub fn by_level(level: u8) -> &'static LevelDefinition {
        LEVELS
            .iter()
            .find(|definition| definition.level == level)
            .unwrap_or(&LEVELS[0])
    }

    pub fn max_level() -> u8 {
        LEVELS[LEVELS.len() - 1].level
    }
}
