//! Injury and bye-week warnings.

use std::fmt;

use crate::yahoo::Player;

/// Statuses that keep a player out of the game.
pub const UNAVAILABLE_STATUSES: [&str; 4] = ["O", "IR", "PUP", "SUSP"];

/// Game-time decision statuses.
pub const QUESTIONABLE_STATUSES: [&str; 2] = ["Q", "D"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskKind {
    Unavailable { status: String },
    Questionable { status: String },
    ByeOnly,
}

/// One warning line for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFlag {
    pub slot: String,
    pub name: String,
    pub kind: RiskKind,
    pub bye_week: Option<u8>,
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RiskKind::Unavailable { status } | RiskKind::Questionable { status } => {
                write!(f, "{}: {} is {}", self.slot, self.name, status)?
            }
            RiskKind::ByeOnly => write!(f, "{}: {}", self.slot, self.name)?,
        }
        if let Some(week) = self.bye_week {
            write!(f, " (bye wk {week})")?;
        }
        Ok(())
    }
}

/// The warning for one player, if any. Unavailable beats questionable beats bye.
pub fn flag_player(player: &Player) -> Option<RiskFlag> {
    let status = player.status.as_deref().unwrap_or_default().to_uppercase();

    let kind = if UNAVAILABLE_STATUSES.contains(&status.as_str()) {
        RiskKind::Unavailable { status }
    } else if QUESTIONABLE_STATUSES.contains(&status.as_str()) {
        RiskKind::Questionable { status }
    } else if player.bye_week.is_some() {
        RiskKind::ByeOnly
    } else {
        return None;
    };

    Some(RiskFlag {
        slot: player
            .selected_position
            .clone()
            .unwrap_or_else(|| "BN".to_string()),
        name: player.name.clone().unwrap_or_else(|| "Unknown".to_string()),
        kind,
        bye_week: player.bye_week,
    })
}

/// Warnings for every flagged player, in the order given.
pub fn flag_warnings<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<RiskFlag> {
    players.into_iter().filter_map(flag_player).collect()
}
