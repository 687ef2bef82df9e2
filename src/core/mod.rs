//! Core utilities for the Yahoo Fantasy Football CLI
//!
//! - `http`: request header and user agent helpers
//! - `paths`: default on-disk locations

pub mod http;
pub mod paths;

pub use http::{bearer_header_map, user_agent};
pub use paths::default_token_path;
