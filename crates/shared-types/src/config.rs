use serde::{Deserialize, Serialize};

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. Empty means
    /// "same origin": paths are requested as-is.
    #[serde(default)]
    pub base_url: String,
}

/// Durable session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// File the session (token + role) is persisted to.
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_session_path() -> String {
    "session.json".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so that a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
