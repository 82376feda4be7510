//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::alert::DEFAULT_ALERT_DURATION_MS;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings read from `config.toml`.
///
/// Every field has a default, so a missing or partial file is fine.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the palette service; endpoint paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_alert_duration_ms")]
    pub alert_duration_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_alert_duration_ms() -> u64 {
    DEFAULT_ALERT_DURATION_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            alert_duration_ms: default_alert_duration_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
