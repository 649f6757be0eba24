//! Core State trait for challenge lifecycle states.
//!
//! Lifecycle states implement this trait, which provides pure methods for
//! inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// All methods are pure - no side effects. States are immutable values
/// that describe where a challenge currently stands.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are compared when detecting transitions
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel inside snapshots
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
