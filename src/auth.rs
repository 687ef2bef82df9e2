//! OAuth2 session backed by a cached token file.
//!
//! The first authorization (browser consent) happens outside this tool; it
//! expects a token file holding at least an access token, a refresh token and
//! the time the token was issued. A stale token is refreshed against Yahoo's
//! token endpoint and the file is rewritten with the new token.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::{debug, info};

use crate::{
    core::user_agent,
    error::{FflError, Result},
    CONSUMER_KEY_ENV_VAR, CONSUMER_SECRET_ENV_VAR,
};


/// Yahoo's OAuth2 token endpoint.
pub const TOKEN_URL: &str = "https://api.login.yahoo.com/oauth2/get_token";

/// Seconds after `token_time` at which a token counts as stale (Yahoo issues
/// one-hour tokens; refresh a minute early).
pub const TOKEN_LIFETIME_SECS: f64 = 3540.0;

/// Token file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix time (seconds) the access token was issued.
    #[serde(default)]
    pub token_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_secret: Option<String>,
}

impl StoredToken {
    pub fn is_valid_at(&self, now: f64) -> bool {
        now - self.token_time < TOKEN_LIFETIME_SECS
    }
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    xoauth_yahoo_guid: Option<String>,
}

/// Application credentials used for the refresh grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl Credentials {
    /// Environment variables win; the token file's stored pair is the fallback.
    pub fn resolve(token: &StoredToken) -> Result<Self> {
        let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let consumer_key = from_env(CONSUMER_KEY_ENV_VAR).or_else(|| token.consumer_key.clone());
        let consumer_secret =
            from_env(CONSUMER_SECRET_ENV_VAR).or_else(|| token.consumer_secret.clone());

        match (consumer_key, consumer_secret) {
            (Some(consumer_key), Some(consumer_secret)) => Ok(Self {
                consumer_key,
                consumer_secret,
            }),
            _ => Err(FflError::MissingCredentials),
        }
    }
}

/// A loaded token plus where it came from, able to refresh itself.
#[derive(Debug)]
pub struct OAuthSession {
    path: PathBuf,
    token: StoredToken,
    token_url: String,
    client: Client,
}

impl OAuthSession {
    /// Read the token file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FflError::MissingToken {
                path: path.display().to_string(),
            });
        }
        let token: StoredToken = serde_json::from_str(&fs::read_to_string(path)?)?;
        let client = Client::builder().user_agent(user_agent()).build()?;

        Ok(Self {
            path: path.to_path_buf(),
            token,
            token_url: TOKEN_URL.to_string(),
            client,
        })
    }

    /// Use another token endpoint (a mock server in tests).
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    /// Return a usable access token, refreshing and persisting it first if stale.
    pub async fn ensure_fresh(&mut self) -> Result<&str> {
        let now = unix_now()?;
        if self.token.is_valid_at(now) {
            debug!(path = %self.path.display(), "cached token still valid");
        } else {
            info!("access token expired, refreshing");
            self.refresh(now).await?;
        }
        Ok(self.access_token())
    }

    /// Exchange the refresh token for a new access token and rewrite the file.
    pub async fn refresh(&mut self, now: f64) -> Result<()> {
        let credentials = Credentials::resolve(&self.token)?;
        let form = [
            ("client_id", credentials.consumer_key.as_str()),
            ("client_secret", credentials.consumer_secret.as_str()),
            ("redirect_uri", "oob"),
            ("refresh_token", self.token.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self.client.post(&self.token_url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FflError::TokenRefresh {
                message: format!("{status}: {body}"),
            });
        }
        let refreshed: RefreshResponse = response.json().await?;

        self.token.access_token = refreshed.access_token;
        if let Some(refresh_token) = refreshed.refresh_token {
            self.token.refresh_token = refresh_token;
        }
        if refreshed.token_type.is_some() {
            self.token.token_type = refreshed.token_type;
        }
        if refreshed.xoauth_yahoo_guid.is_some() {
            self.token.guid = refreshed.xoauth_yahoo_guid;
        }
        self.token.token_time = now;

        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.token)?)?;
        debug!(path = %self.path.display(), "token file updated");
        Ok(())
    }
}

fn unix_now() -> Result<f64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs_f64())
}
