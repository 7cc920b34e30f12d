//! TMDB search endpoint
//!
//! Builds the HTTP client from configuration and the environment token.

mod client;

pub use client::TmdbClient;

use crate::config::ApiConfig;
use crate::error::SearchError;

/// Create a client from configuration
///
/// Returns an error if the token is missing or blank.
pub fn client_from_config(api: &ApiConfig, token: Option<&str>) -> Result<TmdbClient, SearchError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            SearchError::NotConfigured(format!(
                "Missing or empty {} environment variable",
                crate::config::TOKEN_ENV_VAR
            ))
        })?;

    TmdbClient::new(token.to_string(), api)
}
