//! Async TMDB search client
//!
//! Issues `GET {base_url}/search/movie?query=...` with a bearer token and
//! decodes the `results` array. Requests can be abandoned through a
//! `CancellationToken` when a newer search supersedes them.

use std::fmt;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tokio_util::sync::CancellationToken;

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::movie::{Movie, SearchResponse};

/// Longest error body kept in `SearchError::Api`
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    language: Option<String>,
    include_adult: bool,
}

// Hand-written so the token never ends up in logs
impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("include_adult", &self.include_adult)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Create a client with its own connection pool
    pub fn new(token: String, api: &ApiConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self::with_http_client(http, token, api))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(http: reqwest::Client, token: String, api: &ApiConfig) -> Self {
        Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token,
            language: api.language.clone().filter(|l| !l.trim().is_empty()),
            include_adult: api.include_adult,
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search/movie", self.base_url)
    }

    /// Build the search request without sending it
    pub fn build_request(&self, query: &str) -> Result<reqwest::Request, SearchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("include_adult", self.include_adult.to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }

        self.http
            .get(self.search_url())
            .query(&params)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))
    }

    /// Run one search to completion
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        let request = self.build_request(query)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Api {
                code: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        parse_search_body(&body)
    }

    /// Run one search, giving up as soon as `cancel_token` fires
    pub async fn search_with_cancel(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<Movie>, SearchError> {
        if cancel_token.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(SearchError::Cancelled),
            result = self.search(query) => result,
        }
    }
}

/// Decode a 2xx body into its result list
pub fn parse_search_body(body: &str) -> Result<Vec<Movie>, SearchError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.results)
        .map_err(|e| SearchError::Parse(e.to_string()))
}

/// TMDB errors look like `{"status_code": 7, "status_message": "..."}`
fn api_error_message(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("status_message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        return "Unknown error".to_string();
    }
    message.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
