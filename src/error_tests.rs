//! Tests for error types

use super::*;

#[test]
fn test_not_configured_display() {
    let error = SearchError::NotConfigured("TMDB_TOKEN is not set".to_string());
    let msg = error.to_string();
    assert!(msg.contains("not configured"));
    assert!(msg.contains("TMDB_TOKEN"));
}

#[test]
fn test_api_error_display() {
    let error = SearchError::Api {
        code: 401,
        message: "Invalid API key".to_string(),
    };
    assert_eq!(error.to_string(), "API error (401): Invalid API key");
}

#[test]
fn test_network_and_parse_display() {
    assert!(
        SearchError::Network("connection refused".to_string())
            .to_string()
            .contains("connection refused")
    );
    assert!(
        SearchError::Parse("missing field `results`".to_string())
            .to_string()
            .starts_with("Parse error")
    );
}

#[test]
fn test_search_error_clone_and_equality() {
    let err1 = SearchError::Network("test".to_string());
    let err2 = err1.clone();
    let err3 = SearchError::Network("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
    assert_ne!(SearchError::Cancelled, err1);
}

#[test]
fn test_config_error_io_keeps_source() {
    use std::error::Error as _;

    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = ConfigError::Io {
        path: "/tmp/config.toml".to_string(),
        source: io_err,
    };

    assert!(error.to_string().contains("/tmp/config.toml"));
    assert!(error.source().is_some());
}

#[test]
fn test_config_error_invalid_display() {
    let error = ConfigError::Invalid {
        path: "config.toml".to_string(),
        message: "expected a boolean".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("expected a boolean"));
}
