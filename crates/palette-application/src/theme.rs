//! Saved visual theme.

use palette_core::error::Result;
use palette_core::state::{DEFAULT_THEME, KeyValueStore, THEME_KEY};
use palette_core::ui::ThemeView;
use std::sync::Arc;

/// The theme chosen on any page, persisted under `cc_theme` and applied on every page.
pub struct ThemePreference {
    store: Arc<dyn KeyValueStore>,
    view: Arc<dyn ThemeView>,
}

impl ThemePreference {
    pub fn new(store: Arc<dyn KeyValueStore>, view: Arc<dyn ThemeView>) -> Self {
        Self { store, view }
    }

    /// The saved theme, or the default when nothing usable is stored.
    pub async fn load(&self) -> String {
        match self.store.get(THEME_KEY).await {
            Ok(Some(theme)) if !theme.trim().is_empty() => theme,
            Ok(_) => DEFAULT_THEME.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "[Theme] Could not read saved theme");
                DEFAULT_THEME.to_string()
            }
        }
    }

    pub async fn apply_saved(&self) -> String {
        let theme = self.load().await;
        self.view.apply_theme(&theme);
        theme
    }

    /// Persists and applies `theme`. A blank name selects the default.
    pub async fn set(&self, theme: &str) -> Result<String> {
        let theme = match theme.trim() {
            "" => DEFAULT_THEME,
            name => name,
        };
        self.store.set(THEME_KEY, theme).await?;
        self.view.apply_theme(theme);
        tracing::debug!(theme, "[Theme] Changed");
        Ok(theme.to_string())
    }
}
