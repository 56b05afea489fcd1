use std::env;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:1323";
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BACKEND_URL is not a valid URL: {0}")]
    InvalidBackendUrl(String),

    #[error("BACKEND_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_backend_url() -> String {
    sanitize_base_url(&env::var("BACKEND_URL").unwrap_or_default(), DEFAULT_BACKEND_URL)
}

pub fn get_proxy_url() -> String {
    sanitize_base_url(&env::var("PROXY_URL").unwrap_or_default(), DEFAULT_PROXY_URL)
}

/// Timeout applied to outbound backend calls. `None` keeps reqwest's default.
pub fn get_backend_timeout() -> Result<Option<Duration>, ConfigError> {
    let raw = match env::var("BACKEND_TIMEOUT_SECS") {
        Ok(v) if !v.trim().is_empty() => v,
        _ => return Ok(None),
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidTimeout(raw)),
    }
}

/// Confirms the backend base URL is an absolute http(s) URL.
pub fn validate_backend_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidBackendUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidBackendUrl(format!("unsupported scheme {other}"))),
    }
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
