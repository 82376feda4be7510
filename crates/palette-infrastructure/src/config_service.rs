//! Configuration service implementation.
//!
//! Loads [`ClientConfig`] from `config.toml`, writing a default file on first run,
//! then applies environment overrides.

use crate::paths::PalettePaths;
use crate::storage::AtomicTomlFile;
use palette_core::config::ClientConfig;
use palette_core::error::{PaletteError, Result};
use std::sync::{Arc, RwLock};

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "PALETTE_BASE_URL";
/// Overrides `alert_duration_ms`.
pub const ENV_ALERT_MS: &str = "PALETTE_ALERT_MS";

/// Loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: PalettePaths,
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: PalettePaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;
        let loaded = apply_env_overrides(loaded, |key| std::env::var(key).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<ClientConfig> {
        let path = self.paths.config_file()?;
        let file = AtomicTomlFile::<ClientConfig>::new(path.clone());

        match file.load()? {
            Some(config) => Ok(config),
            None => {
                let default_config = ClientConfig::default();
                if let Err(e) = file.save(&default_config) {
                    // A read-only config dir must not stop the client.
                    tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
                }
                Ok(default_config)
            }
        }
    }
}

/// Applies `PALETTE_*` overrides. Unparseable numbers are ignored with a warning.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }
    if let Some(raw) = lookup(ENV_ALERT_MS) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.alert_duration_ms = ms,
            Err(_) => tracing::warn!(value = %raw, "Ignoring invalid {}", ENV_ALERT_MS),
        }
    }
    config
}

/// Rejects a base URL the HTTP layer could not join paths onto.
pub fn validate(config: &ClientConfig) -> Result<()> {
    reqwest::Url::parse(&config.base_url)
        .map(|_| ())
        .map_err(|e| PaletteError::config(format!("invalid base_url '{}': {}", config.base_url, e)))
}
