//! Tool definitions module.
//!
//! Each tool is defined in its own file with its params struct, outcome
//! types, and an `execute()` method over the shared Pokedex.

mod get_stats;

pub use get_stats::{GetStatsParams, GetStatsTool, StatsOutcome};
