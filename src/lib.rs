//! Yahoo Fantasy Football CLI Library
//!
//! Pulls one team's weekly roster from the Yahoo Fantasy Sports API and
//! evaluates the lineup.
//!
//! ## Features
//!
//! - **OAuth2 Session**: Cached token file, refreshed automatically when stale
//! - **Team Lookup**: Exact, case-insensitive, then partial team-name matching
//! - **Lineup Split**: Starters vs bench (BN, IR, IR+, NA)
//! - **Risk Flags**: Injury status and bye-week warnings
//! - **Swap Suggestions**: Bench players projected to outscore a starter in the same slot
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_ffl::{commands::lineup_report::*, LeagueId, Week};
//!
//! # async fn example() -> yahoo_ffl::Result<()> {
//! let params = LineupParams {
//!     week: Some(Week::new(3)?),
//!     league_id: Some(LeagueId::new(123456)),
//!     team: Some("My Team".to_string()),
//!     game: "nfl".to_string(),
//!     token_file: None,
//! };
//!
//! handle_lineup_report(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export YAHOO_FFL_LEAGUE_ID=123456
//! export YAHOO_FFL_TEAM_NAME="My Team"
//! export YAHOO_CONSUMER_KEY=...
//! export YAHOO_CONSUMER_SECRET=...
//! ```

pub mod auth;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod lineup;
pub mod logging;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{LeagueId, LeagueKey, PlayerId, TeamKey, Week};
pub use error::{FflError, Result};
pub use yahoo::{Player, TeamEntry};

pub const LEAGUE_ID_ENV_VAR: &str = "YAHOO_FFL_LEAGUE_ID";
pub const TEAM_NAME_ENV_VAR: &str = "YAHOO_FFL_TEAM_NAME";
pub const CONSUMER_KEY_ENV_VAR: &str = "YAHOO_CONSUMER_KEY";
pub const CONSUMER_SECRET_ENV_VAR: &str = "YAHOO_CONSUMER_SECRET";
