//! Console configuration (environment driven).

use std::time::Duration;

use thiserror::Error;

use crate::demo_app::{DemoAppLoader, DEMO_APP_APPLICATION_ID};

pub const DEFAULT_DOCS_URL: &str = "https://docs.logto.io";
pub const DEFAULT_DEMO_APP_PATH: &str = "/demo-app";
pub const DEFAULT_LOOKUP_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_LOOKUP_BACKOFF_MS: u64 = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be a non-negative integer, got `{value}`")]
    InvalidDuration { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Static knobs for the console views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Documentation site root, without trailing slash.
    pub docs_base_url: String,
    /// Where the demo app is served from (opened in a new tab).
    pub demo_app_path: String,
    /// Application id probed to decide whether the demo card is shown.
    pub demo_app_id: String,
    /// Attempts made by the demo lookup before settling on a transient failure.
    pub lookup_max_attempts: u32,
    /// Base delay between lookup retries; `0` leaves pacing to the host.
    pub lookup_backoff_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            docs_base_url: DEFAULT_DOCS_URL.to_string(),
            demo_app_path: DEFAULT_DEMO_APP_PATH.to_string(),
            demo_app_id: DEMO_APP_APPLICATION_ID.to_string(),
            lookup_max_attempts: DEFAULT_LOOKUP_MAX_ATTEMPTS,
            lookup_backoff_ms: DEFAULT_LOOKUP_BACKOFF_MS,
        }
    }
}

impl ConsoleConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let docs_base_url = match lookup("IDCONSOLE_DOCS_URL") {
            Some(url) => non_empty("IDCONSOLE_DOCS_URL", url)?,
            None => {
                tracing::debug!("IDCONSOLE_DOCS_URL not set; using {}", defaults.docs_base_url);
                defaults.docs_base_url
            }
        };

        let demo_app_path = match lookup("IDCONSOLE_DEMO_APP_PATH") {
            Some(path) => non_empty("IDCONSOLE_DEMO_APP_PATH", path)?,
            None => defaults.demo_app_path,
        };

        let demo_app_id = match lookup("IDCONSOLE_DEMO_APP_ID") {
            Some(id) => non_empty("IDCONSOLE_DEMO_APP_ID", id)?,
            None => defaults.demo_app_id,
        };

        let lookup_max_attempts = match lookup("IDCONSOLE_LOOKUP_MAX_ATTEMPTS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "IDCONSOLE_LOOKUP_MAX_ATTEMPTS",
                        value: raw,
                    });
                }
            },
            None => defaults.lookup_max_attempts,
        };

        let lookup_backoff_ms = match lookup("IDCONSOLE_LOOKUP_BACKOFF_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    key: "IDCONSOLE_LOOKUP_BACKOFF_MS",
                    value: raw.clone(),
                })?,
            None => defaults.lookup_backoff_ms,
        };

        Ok(Self {
            docs_base_url: docs_base_url.trim_end_matches('/').to_string(),
            demo_app_path,
            demo_app_id,
            lookup_max_attempts,
            lookup_backoff_ms,
        })
    }

    /// Demo lookup driver with the configured attempts and backoff.
    pub fn demo_app_loader(&self) -> DemoAppLoader {
        DemoAppLoader::new(self.lookup_max_attempts)
            .with_backoff(Duration::from_millis(self.lookup_backoff_ms))
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::Empty { key })
    } else {
        Ok(trimmed.to_string())
    }
}
