//! Yahoo Fantasy Sports API access: HTTP client, wire types and parsing.

pub mod http;
pub mod parse;
pub mod types;

pub use http::{YahooClient, FANTASY_BASE_URL};
pub use types::{Player, ProjectionMap, TeamEntry};
