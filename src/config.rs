//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server builds a [`ClientConfig`] from its environment, provides it
//! as Leptos context while rendering, and writes it into `<meta>` tags of the
//! shell. The hydrated client reads the same values back from those tags, so
//! both sides agree on the API base URL without a rebuild.
//!
//! Unparseable values fall back to defaults rather than failing the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Environment variable names read by the host.
pub const API_BASE_URL_ENV: &str = "PORTAL_API_BASE_URL";
pub const REQUEST_TIMEOUT_MS_ENV: &str = "PORTAL_REQUEST_TIMEOUT_MS";
pub const LOG_LEVEL_ENV: &str = "PORTAL_LOG_LEVEL";

/// `<meta name=...>` keys written into the shell.
pub const API_BASE_URL_META: &str = "portal-api-base-url";
pub const REQUEST_TIMEOUT_MS_META: &str = "portal-request-timeout-ms";
pub const LOG_LEVEL_META: &str = "portal-log-level";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the auth API, without a trailing slash.
    pub api_base_url: String,
    /// `None` disables the request timeout.
    pub request_timeout: Option<Duration>,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Some(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from raw optional values (env vars or meta tags).
    ///
    /// - base URL: blank → default; trailing `/` trimmed
    /// - timeout ms: `0` disables, unparseable → default
    /// - log level: case-insensitive `error`..`trace`, unparseable → default
    #[must_use]
    pub fn from_raw(api_base_url: Option<&str>, request_timeout_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        let request_timeout = match request_timeout_ms.and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => Some(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)),
        };

        let log_level = log_level
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base_url, request_timeout, log_level }
    }

    /// Build config from the host process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_URL_ENV).ok();
        let timeout = std::env::var(REQUEST_TIMEOUT_MS_ENV).ok();
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        Self::from_raw(base.as_deref(), timeout.as_deref(), level.as_deref())
    }

    /// Read config from the `<meta>` tags rendered into the shell.
    /// Outside the browser this yields the defaults.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let base = read_meta(API_BASE_URL_META);
            let timeout = read_meta(REQUEST_TIMEOUT_MS_META);
            let level = read_meta(LOG_LEVEL_META);
            Self::from_raw(base.as_deref(), timeout.as_deref(), level.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for an API path such as `/api/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Timeout value as rendered into the shell (`0` when disabled).
    #[must_use]
    pub fn request_timeout_ms(&self) -> u64 {
        self.request_timeout
            .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
