//! Starter / bench partitioning.

use crate::yahoo::Player;

/// Slot codes that mean "not in the starting lineup".
pub const BENCH_SLOTS: [&str; 4] = ["BN", "IR", "IR+", "NA"];

/// Whether a slot code (any case) is a bench or reserve marker.
pub fn is_bench_slot(slot: &str) -> bool {
    let slot = slot.to_uppercase();
    BENCH_SLOTS.contains(&slot.as_str())
}

/// A roster split into starters and bench, each in roster order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lineup {
    pub starters: Vec<Player>,
    pub bench: Vec<Player>,
}

impl Lineup {
    /// Starters followed by bench.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.starters.iter().chain(self.bench.iter())
    }
}

/// Partition players by their selected slot. A player without a slot counts
/// as a starter.
pub fn split_starters_bench(players: Vec<Player>) -> Lineup {
    let (bench, starters): (Vec<Player>, Vec<Player>) = players.into_iter().partition(|p| {
        p.selected_position
            .as_deref()
            .is_some_and(is_bench_slot)
    });
    Lineup { starters, bench }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, slot: Option<&str>) -> Player {
        Player {
            name: Some(name.to_string()),
            selected_position: slot.map(str::to_string),
            ..Player::default()
        }
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().filter_map(|p| p.name.as_deref()).collect()
    }

    #[test]
    fn test_bench_slots() {
        assert!(is_bench_slot("BN"));
        assert!(is_bench_slot("IR"));
        assert!(is_bench_slot("IR+"));
        assert!(is_bench_slot("NA"));
        assert!(is_bench_slot("bn"));
        assert!(!is_bench_slot("QB"));
        assert!(!is_bench_slot("W/R/T"));
        assert!(!is_bench_slot(""));
    }

    #[test]
    fn test_split_preserves_order_and_count() {
        let lineup = split_starters_bench(vec![
            player("a", Some("QB")),
            player("b", Some("BN")),
            player("c", Some("RB")),
            player("d", Some("IR+")),
            player("e", Some("na")),
            player("f", None),
        ]);

        assert_eq!(names(&lineup.starters), vec!["a", "c", "f"]);
        assert_eq!(names(&lineup.bench), vec!["b", "d", "e"]);
        assert_eq!(lineup.players().count(), 6);
    }

    #[test]
    fn test_split_empty() {
        let lineup = split_starters_bench(Vec::new());
        assert!(lineup.starters.is_empty());
        assert!(lineup.bench.is_empty());
    }
}
