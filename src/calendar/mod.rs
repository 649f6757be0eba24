//! Mapping wall-clock dates onto the 30-day challenge.

mod day;
mod period;

pub use day::{current_day, elapsed_days};
pub use period::ChallengePeriod;
