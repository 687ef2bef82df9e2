//! CLI argument definitions and parsing.

pub mod prompt;
pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::{LeagueId, Week};

/// Pull a Yahoo Fantasy Football roster and evaluate the lineup.
#[derive(Debug, Parser)]
#[clap(
    name = "yahoo-ffl",
    about = "Yahoo Fantasy Football lineup pull + evaluation"
)]
pub struct LineupCli {
    /// NFL week number (1-18). If omitted, you'll be prompted.
    #[clap(long, short)]
    pub week: Option<Week>,

    /// League ID (or set `YAHOO_FFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Team display name; exact match preferred, case-insensitive and partial matches accepted
    /// (or set `YAHOO_FFL_TEAM_NAME` env var).
    #[clap(long, short)]
    pub team: Option<String>,

    /// Yahoo game code or game ID the league belongs to.
    #[clap(long, short, default_value = "nfl")]
    pub game: String,

    /// Path to the cached OAuth2 token file (defaults to ./oauth2.json, then the config dir).
    #[clap(long)]
    pub token_file: Option<PathBuf>,

    /// Log pipeline progress and request URLs to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = LineupCli::try_parse_from(["yahoo-ffl"]).unwrap();
        assert!(cli.week.is_none());
        assert!(cli.league_id.is_none());
        assert!(cli.team.is_none());
        assert_eq!(cli.game, "nfl");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = LineupCli::try_parse_from([
            "yahoo-ffl",
            "--week",
            "3",
            "--league-id",
            "387432",
            "--team",
            "Kevin's wonderful team",
            "--game",
            "449",
            "--token-file",
            "/tmp/token.json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.week.unwrap().as_u16(), 3);
        assert_eq!(cli.league_id.unwrap().as_u32(), 387432);
        assert_eq!(cli.team.as_deref(), Some("Kevin's wonderful team"));
        assert_eq!(cli.game, "449");
        assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/token.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_week_out_of_range_rejected() {
        assert!(LineupCli::try_parse_from(["yahoo-ffl", "--week", "0"]).is_err());
        assert!(LineupCli::try_parse_from(["yahoo-ffl", "--week", "19"]).is_err());
        assert!(LineupCli::try_parse_from(["yahoo-ffl", "--week", "two"]).is_err());
    }
}
