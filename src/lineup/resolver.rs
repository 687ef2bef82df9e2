//! Team name resolution.

use crate::yahoo::TeamEntry;

/// Which rule matched the requested team name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    CaseInsensitive,
    Substring,
}

/// Find the team whose display name matches `target`.
///
/// Tiers are tried in order (byte-exact, case-insensitive exact,
/// case-insensitive containment of `target` in the team name) and the first
/// team matching a tier wins. The substring tier can match several teams in a
/// large league; the first one in league order is taken without warning.
pub fn resolve_team<'a>(teams: &'a [TeamEntry], target: &str) -> Option<(&'a TeamEntry, MatchTier)> {
    if let Some(team) = teams.iter().find(|t| t.name == target) {
        return Some((team, MatchTier::Exact));
    }

    let lower = target.to_lowercase();
    if let Some(team) = teams.iter().find(|t| t.name.to_lowercase() == lower) {
        return Some((team, MatchTier::CaseInsensitive));
    }

    teams
        .iter()
        .find(|t| t.name.to_lowercase().contains(&lower))
        .map(|team| (team, MatchTier::Substring))
}

/// Teams sorted case-insensitively by name, for the "team not found" listing.
pub fn teams_by_name(teams: &[TeamEntry]) -> Vec<&TeamEntry> {
    let mut sorted: Vec<&TeamEntry> = teams.iter().collect();
    sorted.sort_by_key(|t| t.name.to_lowercase());
    sorted
}
