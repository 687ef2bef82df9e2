//! Extraction of teams, rosters and point totals from Yahoo's JSON.
//!
//! Yahoo encodes a record as an array of single-key objects (fragments) and
//! a collection as an object keyed `"0"`..`"n-1"` plus a `"count"` field.
//! The helpers here flatten fragments into one map and walk collections in
//! numeric key order, which is the order Yahoo lists them in.

use serde_json::{Map, Value};

use crate::{
    cli::types::PlayerId,
    error::{FflError, Result},
};

use super::types::{Player, ProjectionMap, RawPlayer, RawPlayerStats, Scalar, TeamEntry};


/// Merge every object found in a (possibly nested) fragment array into one map.
///
/// Objects are merged shallowly; arrays nested inside an object's fields are
/// left as they are. Later fragments win on duplicate keys.
pub fn flatten_fragments(value: &Value) -> Map<String, Value> {
    let mut merged = Map::new();
    merge_fragments(&mut merged, value);
    merged
}

fn merge_fragments(merged: &mut Map<String, Value>, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                merge_fragments(merged, item);
            }
        }
        Value::Object(fields) => {
            for (key, field) in fields {
                merged.insert(key.clone(), field.clone());
            }
        }
        _ => {}
    }
}

/// The `child` value of each numbered entry of a Yahoo collection, in index order.
///
/// The `"count"` field and any other non-numeric keys are skipped, as is an
/// empty collection that Yahoo sends as `[]`.
pub fn indexed_entries<'a>(collection: &'a Value, child: &str) -> Vec<&'a Value> {
    let Some(fields) = collection.as_object() else {
        return Vec::new();
    };

    let mut entries: Vec<(usize, &Value)> = fields
        .iter()
        .filter_map(|(key, entry)| Some((key.parse::<usize>().ok()?, entry.get(child)?)))
        .collect();
    entries.sort_by_key(|(index, _)| *index);
    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// Find the fragment carrying `key` in a resource array like
/// `"league": [{..metadata..}, {"teams": {..}}]`.
pub fn find_section<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Array(items) => items.iter().find_map(|item| find_section(item, key)),
        Value::Object(fields) => fields.get(key),
        _ => None,
    }
}

fn resource<'a>(body: &'a Value, name: &str) -> Result<&'a Value> {
    body.get("fantasy_content")
        .and_then(|content| content.get(name))
        .ok_or_else(|| FflError::unexpected(format!("fantasy_content.{name}")))
}

/// Teams of a league from a `league/{key}/teams` response.
pub fn parse_league_teams(body: &Value) -> Result<Vec<TeamEntry>> {
    let league = resource(body, "league")?;
    let teams = find_section(league, "teams").ok_or_else(|| FflError::unexpected("league teams"))?;

    indexed_entries(teams, "team")
        .into_iter()
        .map(|team| {
            let fields = flatten_fragments(team);
            let team_key = fields
                .get("team_key")
                .and_then(Value::as_str)
                .ok_or_else(|| FflError::unexpected("team_key"))?;
            let name = fields.get("name").and_then(Value::as_str).unwrap_or_default();
            Ok(TeamEntry::new(team_key, name))
        })
        .collect()
}

/// Normalize one roster player into the flat [`Player`] record.
///
/// Accepts Yahoo's fragment layout as well as an already flat object.
pub fn normalize_player(player: &Value) -> Result<Player> {
    let raw: RawPlayer = serde_json::from_value(Value::Object(flatten_fragments(player)))?;
    Ok(raw.into())
}

/// Rostered players from a `team/{key}/roster` response, in roster order.
pub fn parse_roster(body: &Value) -> Result<Vec<Player>> {
    let team = resource(body, "team")?;
    let roster = find_section(team, "roster").ok_or_else(|| FflError::unexpected("team roster"))?;

    let Some(players) = indexed_entries(roster, "players").into_iter().next() else {
        return Ok(Vec::new());
    };

    indexed_entries(players, "player")
        .into_iter()
        .map(normalize_player)
        .collect()
}

/// Point totals from a `league/{key}/players;player_keys=../stats` response.
///
/// Players without an ID or without any total are left out of the map.
pub fn parse_player_points(body: &Value) -> Result<ProjectionMap> {
    let league = resource(body, "league")?;
    let players =
        find_section(league, "players").ok_or_else(|| FflError::unexpected("league players"))?;

    let mut points = ProjectionMap::new();
    for player in indexed_entries(players, "player") {
        let raw: RawPlayerStats = serde_json::from_value(Value::Object(flatten_fragments(player)))?;
        let id = raw.player_id.as_ref().and_then(Scalar::as_u64);
        if let (Some(id), Some(total)) = (id, raw.projection()) {
            points.insert(PlayerId::new(id), total);
        }
    }
    Ok(points)
}
