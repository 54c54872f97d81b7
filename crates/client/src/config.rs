use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[api] base_url`.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Parse config file contents and apply the base URL override.
///
/// Unparseable contents fall back to defaults; the override wins over
/// whatever the file says.
pub fn parse_config(contents: Option<&str>, base_url_override: Option<String>) -> AppConfig {
    let mut config = match contents {
        Some(contents) => toml::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config
}

/// Load `.env` and `config.toml` once and keep the result for the
/// lifetime of the process. Later calls return the first result.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let contents = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => Some(contents),
            Err(e) => {
                tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
                None
            }
        };
        let config = parse_config(contents.as_deref(), std::env::var(API_BASE_URL_VAR).ok());
        tracing::info!(base_url = %config.api.base_url, session = %config.session.path, "Configuration loaded");
        config
    })
}
