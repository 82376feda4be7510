//! Transient user notification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default time an alert stays visible.
pub const DEFAULT_ALERT_DURATION_MS: u64 = 2500;

/// At most one alert is live at a time; a new one replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub message: String,
    pub is_success: bool,
    pub expires_at: DateTime<Utc>,
}

impl Alert {
    /// An expiry past the representable range saturates at the latest instant.
    pub fn new(message: impl Into<String>, is_success: bool, visible_for: Duration) -> Self {
        let now = Utc::now();
        Self {
            message: message.into(),
            is_success,
            expires_at: now
                .checked_add_signed(visible_for)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Style class a surface applies.
    pub fn style(&self) -> AlertStyle {
        if self.is_success {
            AlertStyle::Success
        } else {
            AlertStyle::Error
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStyle {
    Success,
    Error,
}
