//! Experience levels unlocked by cumulative volume.
//!
//! - `LevelTable`: the static ladder of seven levels
//! - `level_for_record` / `detect_change`: derivation and transition detection

mod engine;
mod table;

pub use engine::{detect_change, level_for_record};
pub use table::{LevelDefinition, LevelTable};
