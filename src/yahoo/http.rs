//! Yahoo Fantasy Sports v2 API client.

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{LeagueKey, PlayerId, TeamKey, Week},
    core::{bearer_header_map, user_agent},
    Result,
};

use super::{
    parse::{parse_league_teams, parse_player_points, parse_roster},
    types::{Player, ProjectionMap, TeamEntry},
};

#[cfg(test)]
mod tests;

/// Base path for the Yahoo Fantasy Sports v2 API.
pub const FANTASY_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Authenticated client for the handful of resources the lineup report needs.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl YahooClient {
    pub fn new(access_token: &str) -> Result<Self> {
        Self::with_base_url(access_token, FANTASY_BASE_URL)
    }

    /// Client against another API root (a mock server in tests).
    pub fn with_base_url(access_token: &str, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent()).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            headers: bearer_header_map(access_token)?,
        })
    }

    async fn get_json(&self, resource: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!(url = %url, "GET");

        let v = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// All teams in the league, in the order Yahoo lists them.
    pub async fn league_teams(&self, league: &LeagueKey) -> Result<Vec<TeamEntry>> {
        let body = self.get_json(&format!("league/{league}/teams")).await?;
        let teams = parse_league_teams(&body)?;
        debug!(league = %league, count = teams.len(), "league teams loaded");
        Ok(teams)
    }

    /// Roster for `week`, or for Yahoo's current week when `week` is `None`.
    pub async fn team_roster(&self, team: &TeamKey, week: Option<Week>) -> Result<Vec<Player>> {
        let resource = match week {
            Some(week) => format!("team/{team}/roster;week={week}"),
            None => format!("team/{team}/roster"),
        };
        let players = parse_roster(&self.get_json(&resource).await?)?;
        debug!(team = %team, count = players.len(), "roster loaded");
        Ok(players)
    }

    /// Weekly point totals (projected when available) for one batch of players.
    pub async fn player_points(
        &self,
        league: &LeagueKey,
        player_ids: &[PlayerId],
        week: Week,
    ) -> Result<ProjectionMap> {
        let keys = player_ids
            .iter()
            .map(|id| league.player_key(*id))
            .collect::<Vec<_>>()
            .join(",");
        let resource =
            format!("league/{league}/players;player_keys={keys}/stats;type=week;week={week}");
        parse_player_points(&self.get_json(&resource).await?)
    }
}
