// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> Option<String> {
    Some("en-US".to_string())
}

fn default_notification_secs() -> u64 {
    DEFAULT_NOTIFICATION_SECS
}

/// Search endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: Option<String>,
    #[serde(default)]
    pub include_adult: bool,
    /// No deadline when absent
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            language: default_language(),
            include_adult: false,
            request_timeout_secs: None,
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            notification_secs: default_notification_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
