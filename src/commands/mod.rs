//! Command implementations for the Yahoo Fantasy Football CLI

pub mod lineup_report;

use crate::{error::FflError, LeagueId, Result, LEAGUE_ID_ENV_VAR, TEAM_NAME_ENV_VAR};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| FflError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Resolve the target team name from option or environment variable
pub fn resolve_team_name(team_name: Option<String>) -> Result<String> {
    team_name
        .or_else(|| std::env::var(TEAM_NAME_ENV_VAR).ok())
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| FflError::MissingTeamName {
            env_var: TEAM_NAME_ENV_VAR.to_string(),
        })
}
