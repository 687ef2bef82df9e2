//! Lineup evaluation: everything between the fetched roster and the printed report.
//!
//! - `resolver`: team name to team key
//! - `classifier`: starters vs bench
//! - `flags`: injury and bye-week warnings
//! - `advisor`: projections and swap suggestions
//! - `presenter`: text tables

pub mod advisor;
pub mod classifier;
pub mod flags;
pub mod presenter;
pub mod resolver;

pub use advisor::{fetch_projections, suggest_swaps, Projections, SwapSuggestion};
pub use classifier::{is_bench_slot, split_starters_bench, Lineup};
pub use flags::{flag_warnings, RiskFlag, RiskKind};
pub use presenter::{render_report, render_table};
pub use resolver::{resolve_team, teams_by_name, MatchTier};

use crate::yahoo::Player;

/// Everything the report prints, computed from one roster and its projections.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupReport {
    pub lineup: Lineup,
    pub warnings: Vec<RiskFlag>,
    pub projections: Projections,
    /// `None` when no projections were fetched.
    pub suggestions: Option<Vec<SwapSuggestion>>,
}

impl LineupReport {
    pub fn build(players: Vec<Player>, projections: Projections) -> Self {
        let lineup = split_starters_bench(players);
        let warnings = flag_warnings(lineup.players());
        let suggestions = match &projections {
            Projections::Available(map) if !map.is_empty() => Some(suggest_swaps(&lineup, map)),
            _ => None,
        };

        Self {
            lineup,
            warnings,
            projections,
            suggestions,
        }
    }
}
