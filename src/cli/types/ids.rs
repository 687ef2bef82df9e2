//! ID and key types for Yahoo Fantasy Football.

use crate::error::{FflError, Result};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo league IDs (the numeric part of a league key).
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::LeagueId;
///
/// let league_id = LeagueId::new(387432);
/// assert_eq!(league_id.as_u32(), 387432);
/// assert_eq!(league_id.to_string(), "387432");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Fully qualified league key, e.g. `nfl.l.387432`.
///
/// The game code prefix is also what Yahoo expects in front of player IDs
/// when building player keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeagueKey {
    game: String,
    league_id: LeagueId,
}

impl LeagueKey {
    pub fn new(game: impl Into<String>, league_id: LeagueId) -> Self {
        Self {
            game: game.into(),
            league_id,
        }
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    /// Player key for a player in this league's game, e.g. `nfl.p.30123`.
    pub fn player_key(&self, player_id: PlayerId) -> String {
        format!("{}.p.{}", self.game, player_id)
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.l.{}", self.game, self.league_id)
    }
}

/// Opaque team handle as issued by Yahoo, e.g. `nfl.l.387432.t.4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamKey(pub String);

impl TeamKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
