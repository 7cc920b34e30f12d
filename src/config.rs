//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit path).
//! A missing file is not an error: every field has a default.

mod types;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use types::{ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_NOTIFICATION_SECS, UiConfig};

/// Environment variable holding the TMDB read access token
pub const TOKEN_ENV_VAR: &str = "TMDB_TOKEN";

/// Default location: `<config_dir>/cinesearch/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cinesearch").join("config.toml"))
}

/// Load configuration from `path`, or from the default location when `None`
///
/// An explicitly requested file must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => read_config_file(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|e| ConfigError::Invalid {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Read the API token from the environment, ignoring blank values
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
