use crate::cli::types::{PlayerId, TeamKey};
use serde::{de::IgnoredAny, Deserialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::parse::flatten_fragments;


/// Projected (or, failing that, actual) points per player for one week.
pub type ProjectionMap = BTreeMap<PlayerId, f64>;

/// One team in a league, in the order Yahoo lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub team_key: TeamKey,
    pub name: String,
}

impl TeamEntry {
    pub fn new(team_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_key: TeamKey::new(team_key),
            name: name.into(),
        }
    }
}

/// A rostered player normalized from Yahoo's roster payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Player {
    pub name: Option<String>,
    pub player_id: Option<PlayerId>,
    /// `O`, `DT`, `K`, ...
    pub position_type: Option<String>,
    pub eligible_positions: Vec<String>,
    /// Slot the player currently occupies (`QB`, `W/R/T`, `BN`, `IR`, ...).
    pub selected_position: Option<String>,
    pub status: Option<String>,
    pub bye_week: Option<u8>,
    pub team_abbr: Option<String>,
}

/// Numbers arrive as JSON numbers or as numeric strings depending on the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(f) if f.fract() == 0.0 && *f >= 0.0 => Some(*f as u64),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Float(_) | Scalar::Other(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawName {
    Plain(String),
    Full { full: String },
    Other(IgnoredAny),
}

/// An eligible position: `"QB"` or `{"position": "QB"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPosition {
    Code(String),
    Wrapped { position: String },
    Other(IgnoredAny),
}

impl RawPosition {
    fn into_code(self) -> Option<String> {
        match self {
            RawPosition::Code(code) | RawPosition::Wrapped { position: code } => Some(code),
            RawPosition::Other(_) => None,
        }
    }
}

/// The selected position, which Yahoo nests as fragments
/// (`[{"coverage_type": ..}, {"position": "QB"}]`) but which may also
/// already be a plain code or a single `{"position": ..}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSlot {
    Code(String),
    Wrapped { position: String },
    Fragments(Vec<Value>),
    Other(IgnoredAny),
}

impl RawSlot {
    fn into_code(self) -> Option<String> {
        match self {
            RawSlot::Code(code) | RawSlot::Wrapped { position: code } => Some(code),
            RawSlot::Fragments(parts) => flatten_fragments(&Value::Array(parts))
                .get("position")
                .and_then(Value::as_str)
                .map(str::to_string),
            RawSlot::Other(_) => None,
        }
    }
}

/// Bye weeks: `{"week": "10"}` or `["10"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawByeWeeks {
    Mapping { week: Scalar },
    Sequence(Vec<Scalar>),
    Other(IgnoredAny),
}

impl RawByeWeeks {
    fn week(&self) -> Option<u8> {
        let scalar = match self {
            RawByeWeeks::Mapping { week } => week,
            RawByeWeeks::Sequence(weeks) => weeks.first()?,
            RawByeWeeks::Other(_) => return None,
        };
        scalar.as_u64().and_then(|w| u8::try_from(w).ok())
    }
}

/// Player record after fragment flattening, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub player_id: Option<Scalar>,
    #[serde(default)]
    pub position_type: Option<String>,
    #[serde(default)]
    pub eligible_positions: Option<Vec<RawPosition>>,
    #[serde(default)]
    pub selected_position: Option<RawSlot>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub bye_weeks: Option<RawByeWeeks>,
    #[serde(default)]
    pub editorial_team_abbr: Option<String>,
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        Player {
            name: raw.name.and_then(|n| match n {
                RawName::Plain(s) | RawName::Full { full: s } => Some(s),
                RawName::Other(_) => None,
            }),
            player_id: raw
                .player_id
                .as_ref()
                .and_then(Scalar::as_u64)
                .map(PlayerId::new),
            position_type: non_empty(raw.position_type),
            eligible_positions: raw
                .eligible_positions
                .unwrap_or_default()
                .into_iter()
                .filter_map(RawPosition::into_code)
                .collect(),
            selected_position: raw.selected_position.and_then(RawSlot::into_code),
            status: non_empty(raw.status),
            bye_week: raw.bye_weeks.as_ref().and_then(RawByeWeeks::week),
            team_abbr: non_empty(raw.editorial_team_abbr),
        }
    }
}

/// `{"total": "12.34"}` inside `player_points` / `player_projected_points`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoints {
    #[serde(default)]
    pub total: Option<Scalar>,
}

/// Per-player stats record after fragment flattening.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerStats {
    #[serde(default)]
    pub player_id: Option<Scalar>,
    #[serde(default)]
    pub player_points: Option<RawPoints>,
    #[serde(default)]
    pub player_projected_points: Option<RawPoints>,
}

impl RawPlayerStats {
    /// Projected total when Yahoo has one, otherwise the actual total.
    pub fn projection(&self) -> Option<f64> {
        let total = |p: &Option<RawPoints>| {
            p.as_ref()
                .and_then(|p| p.total.as_ref())
                .and_then(Scalar::as_f64)
        };
        total(&self.player_projected_points).or_else(|| total(&self.player_points))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
