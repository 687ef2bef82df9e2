//! Type-safe wrappers for Yahoo Fantasy Football identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, LeagueKey, PlayerId, TeamKey};
pub use time::Week;
