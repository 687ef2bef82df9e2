//! Error types for the Yahoo Fantasy Football lineup CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FflError>;

/// Process exit code for a team name that matched nothing in the league.
pub const EXIT_TEAM_NOT_FOUND: i32 = 2;

/// Process exit code for every other fatal error.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System clock error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Team name not provided and {env_var} environment variable not set")]
    MissingTeamName { env_var: String },

    #[error("Invalid week: {value} (expected 1-18)")]
    InvalidWeek { value: String },

    #[error("Set YAHOO_CONSUMER_KEY and YAHOO_CONSUMER_SECRET environment variables")]
    MissingCredentials,

    #[error("No OAuth token file at {path}; authorize once with Yahoo and save the token there")]
    MissingToken { path: String },

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    #[error("Unexpected Yahoo response: missing {context}")]
    UnexpectedResponse { context: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },
}

impl FflError {
    /// Exit code the CLI should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FflError::TeamNotFound { .. } => EXIT_TEAM_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }

    pub(crate) fn unexpected(context: impl Into<String>) -> Self {
        FflError::UnexpectedResponse {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests;
