//! Durable client state.
//!
//! The client owns exactly two persisted slots: the last acknowledged username and
//! the chosen visual theme. Everything else is refetched from the service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed key of the slot holding the signed-in username.
pub const SESSION_KEY: &str = "cc_logged_user";

/// Fixed key of the slot holding the chosen theme.
pub const THEME_KEY: &str = "cc_theme";

/// Theme applied when nothing (or nothing usable) is stored.
pub const DEFAULT_THEME: &str = "strawberry";

/// The persisted key-value document.
///
/// # File Location
///
/// - Linux: `~/.config/palette-sync/state.toml`
/// - macOS: `~/Library/Application Support/palette-sync/state.toml`
/// - Windows: `%APPDATA%\palette-sync\state.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a slot. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}
