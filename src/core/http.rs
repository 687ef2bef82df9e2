//! HTTP utilities for Yahoo API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build the headers every Yahoo Fantasy request carries: JSON accept and
/// the OAuth2 bearer token.
pub fn bearer_header_map(access_token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);
    Ok(h)
}

/// User agent sent with every request.
pub fn user_agent() -> String {
    format!("yahoo-ffl/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_map() {
        let headers = bearer_header_map("abc123").unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_bearer_header_map_rejects_control_characters() {
        assert!(bearer_header_map("bad\ntoken").is_err());
    }

    #[test]
    fn test_user_agent_has_version() {
        assert!(user_agent().starts_with("yahoo-ffl/"));
    }
}
