//! Check evaluation: equality, value rendering, tallies, and group nesting.

pub mod counter;
pub mod equals;
pub mod group;
pub mod params;
pub mod run_state;
pub mod stringize;
pub mod title;
pub mod verbosity;
