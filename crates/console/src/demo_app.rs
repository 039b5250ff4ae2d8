//! Demo application lookup.
//!
//! The Get Started page probes `GET /api/applications/{demo-app}` to decide
//! whether to offer the demo card. Only an explicit 404 hides the card; any
//! other failure is treated as "not known yet" and the lookup keeps retrying.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use idconsole_core::ValueObject;

/// Id of the seeded demo application.
pub const DEMO_APP_APPLICATION_ID: &str = "demo-app";

const NOT_FOUND: u16 = 404;

pub fn application_path(id: &str) -> String {
    format!("/api/applications/{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationType {
    Native,
    #[serde(rename = "SPA")]
    Spa,
    Traditional,
}

/// The subset of an application resource the console needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    #[serde(default)]
    pub description: Option<String>,
}

/// Failed API request. `status` is `None` when no response arrived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("request failed ({}): {}", status_label(.status), .message)]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

fn status_label(status: &Option<u16>) -> String {
    status.map_or_else(|| "no response".to_string(), |s| s.to_string())
}

impl RequestError {
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Definitive "this resource does not exist".
    pub fn is_not_found(&self) -> bool {
        self.status == Some(NOT_FOUND)
    }
}

/// Retry every failure except an explicit 404.
pub fn should_retry_on_error(error: &RequestError) -> bool {
    !error.is_not_found()
}

/// Current state of the demo application lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DemoAppLookup {
    /// No response yet.
    #[default]
    Loading,
    Found(Application),
    Failed(RequestError),
}

impl ValueObject for DemoAppLookup {}

impl DemoAppLookup {
    /// Hide the demo card only when the app is known not to exist.
    pub fn is_hidden(&self) -> bool {
        matches!(self, DemoAppLookup::Failed(err) if err.is_not_found())
    }

    /// Still waiting for either the app or a definitive absence.
    pub fn is_loading(&self) -> bool {
        match self {
            DemoAppLookup::Loading => true,
            DemoAppLookup::Found(_) => false,
            DemoAppLookup::Failed(err) => !err.is_not_found(),
        }
    }
}

/// Fetches application resources from the management API.
pub trait ApplicationClient {
    fn fetch_application(&self, id: &str) -> Result<Application, RequestError>;
}

const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Drives a lookup with [`should_retry_on_error`] as the retry policy.
///
/// Retries are back-to-back unless a base delay is set with
/// [`DemoAppLoader::with_backoff`]; the delay then doubles per retry, capped
/// at 30 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAppLoader {
    max_attempts: u32,
    base_delay: Duration,
}

impl DemoAppLoader {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::ZERO,
        }
    }

    pub fn with_backoff(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32 << retry.saturating_sub(1).min(5);
        self.base_delay.saturating_mul(factor).min(MAX_BACKOFF)
    }

    /// Blocking lookup; sleeps the calling thread between retries.
    pub fn load(&self, client: &dyn ApplicationClient, id: &str) -> DemoAppLookup {
        self.load_with(client, id, std::thread::sleep)
    }

    /// Lookup with the pause between retries supplied by the caller, e.g. a
    /// host timer.
    pub fn load_with(
        &self,
        client: &dyn ApplicationClient,
        id: &str,
        mut pause: impl FnMut(Duration),
    ) -> DemoAppLookup {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                let delay = self.backoff(attempt - 1);
                if !delay.is_zero() {
                    tracing::debug!(?delay, attempt, "backing off before retrying demo app lookup");
                    pause(delay);
                }
            }

            match client.fetch_application(id) {
                Ok(app) => return DemoAppLookup::Found(app),
                Err(err) if !should_retry_on_error(&err) => {
                    tracing::debug!(path = %application_path(id), "demo app does not exist");
                    return DemoAppLookup::Failed(err);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %application_path(id),
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "demo app lookup failed; will retry"
                    );
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(err) => DemoAppLookup::Failed(err),
            None => DemoAppLookup::Loading,
        }
    }
}
