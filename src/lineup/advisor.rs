//! Weekly projections and bench-for-starter swap suggestions.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueKey, PlayerId, Week},
    yahoo::{Player, ProjectionMap, YahooClient},
};

use super::classifier::{is_bench_slot, Lineup};

/// Player IDs requested per stats call.
pub const PROJECTION_CHUNK_SIZE: usize = 25;

/// Outcome of the best-effort projection fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Projections {
    Available(ProjectionMap),
    Unavailable { reason: String },
}

impl Projections {
    pub fn get(&self, player_id: Option<PlayerId>) -> Option<f64> {
        match self {
            Projections::Available(map) => map.get(&player_id?).copied(),
            Projections::Unavailable { .. } => None,
        }
    }
}

/// Fetch points for every rostered player with an ID.
///
/// Without a week there is nothing to ask for. Any failure, in any chunk,
/// discards everything fetched so far. An empty result counts as unavailable.
pub async fn fetch_projections(
    client: &YahooClient,
    league: &LeagueKey,
    players: &[Player],
    week: Option<Week>,
) -> Projections {
    let Some(week) = week else {
        return Projections::Unavailable {
            reason: "no scoring week selected".to_string(),
        };
    };

    let ids: Vec<PlayerId> = players.iter().filter_map(|p| p.player_id).collect();
    if ids.is_empty() {
        return Projections::Unavailable {
            reason: "no rostered player has an ID".to_string(),
        };
    }

    let mut projections = ProjectionMap::new();

    for chunk in ids.chunks(PROJECTION_CHUNK_SIZE) {
        match client.player_points(league, chunk, week).await {
            Ok(points) => projections.extend(points),
            Err(e) => {
                warn!(error = %e, "projection fetch failed; continuing without projections");
                return Projections::Unavailable {
                    reason: e.to_string(),
                };
            }
        }
    }

    if projections.is_empty() {
        warn!(week = %week, "stats returned no point totals");
        return Projections::Unavailable {
            reason: "no point totals returned".to_string(),
        };
    }

    debug!(count = projections.len(), week = %week, "projections loaded");
    Projections::Available(projections)
}

/// Start `bench` instead of `starter` at `slot`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapSuggestion {
    pub slot: String,
    pub starter: String,
    pub starter_points: f64,
    pub bench: String,
    pub bench_points: f64,
}

impl fmt::Display for SwapSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Consider {} ({:.2}) over {} in {} ({:.2}).",
            self.bench, self.bench_points, self.starter, self.slot, self.starter_points
        )
    }
}

/// Bench players listed under each position code they are eligible for.
pub fn bench_by_position(bench: &[Player]) -> BTreeMap<&str, Vec<&Player>> {
    let mut by_position: BTreeMap<&str, Vec<&Player>> = BTreeMap::new();
    for player in bench {
        for position in &player.eligible_positions {
            by_position.entry(position.as_str()).or_default().push(player);
        }
    }
    by_position
}

/// Greedy per-slot comparison: for each starter with a known projection,
/// the eligible bench player with the highest known projection, if that
/// projection is strictly higher. Ties keep the first bench player listed.
pub fn suggest_swaps(lineup: &Lineup, projections: &ProjectionMap) -> Vec<SwapSuggestion> {
    let candidates_by_slot = bench_by_position(&lineup.bench);
    let points = |p: &Player| p.player_id.and_then(|id| projections.get(&id).copied());

    let mut suggestions = Vec::new();
    for starter in &lineup.starters {
        let Some(slot) = starter.selected_position.as_deref().map(str::to_uppercase) else {
            continue;
        };
        if is_bench_slot(&slot) {
            continue;
        }
        let Some(starter_points) = points(starter) else {
            continue;
        };
        let Some(candidates) = candidates_by_slot.get(slot.as_str()) else {
            continue;
        };

        let mut best: Option<(&Player, f64)> = None;
        for &candidate in candidates {
            let Some(candidate_points) = points(candidate) else {
                continue;
            };
            if best.map_or(true, |(_, best_points)| candidate_points > best_points) {
                best = Some((candidate, candidate_points));
            }
        }

        if let Some((bench, bench_points)) = best {
            if bench_points > starter_points {
                suggestions.push(SwapSuggestion {
                    slot,
                    starter: starter.name.clone().unwrap_or_default(),
                    starter_points,
                    bench: bench.name.clone().unwrap_or_default(),
                    bench_points,
                });
            }
        }
    }
    suggestions
}
