//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agenda backend API
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Where the token/user pair is persisted between runs
    pub auth_store_path: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            request_timeout: Duration::from_secs(15),
            auth_store_path: PathBuf::from("auth.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `AGENDA_API_URL` is required; the rest have development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("AGENDA_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("AGENDA_API_URL"))?,
            request_timeout: env::var("AGENDA_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(|| Duration::from_secs(15)),
            auth_store_path: env::var("AGENDA_AUTH_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("auth.json")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
