use thiserror::Error;

/// Errors that can occur while searching for movies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No API token was supplied
    #[error("Search not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (DNS, connect, TLS, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body was not a `{"results": [...]}` object
    #[error("Parse error: {0}")]
    Parse(String),

    /// Superseded by a newer search
    #[error("Request cancelled")]
    Cancelled,
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Invalid { path: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
