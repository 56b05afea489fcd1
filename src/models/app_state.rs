use crate::config::{self, ConfigError};

#[derive(Clone)]
pub struct AppState {
    /// Base URL of the external creation service, without trailing slash.
    pub backend_url: String,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(backend_url: impl Into<String>, client: reqwest::Client) -> Self {
        AppState {
            backend_url: backend_url.into(),
            client,
        }
    }

    /// Builds state from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, StateError> {
        let backend_url = config::get_backend_url();
        config::validate_backend_url(&backend_url)?;
        let client = build_client(config::get_backend_timeout()?)?;
        Ok(AppState::new(backend_url, client))
    }
}

pub fn build_client(timeout: Option<std::time::Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder()
        .user_agent(format!("Spawnbox/{}", env!("CARGO_PKG_VERSION")));
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
