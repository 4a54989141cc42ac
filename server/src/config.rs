//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use portal::config::{API_BASE_URL_ENV, ClientConfig, LOG_LEVEL_ENV, REQUEST_TIMEOUT_MS_ENV};

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Forwarded to the browser through the SSR shell.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_API_BASE_URL`, `PORTAL_REQUEST_TIMEOUT_MS`, `PORTAL_LOG_LEVEL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup(PORT_ENV).as_deref())?;
        let base = lookup(API_BASE_URL_ENV);
        let timeout = lookup(REQUEST_TIMEOUT_MS_ENV);
        let level = lookup(LOG_LEVEL_ENV);
        let client = ClientConfig::from_raw(base.as_deref(), timeout.as_deref(), level.as_deref());
        Ok(Self { port, client })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
