//! File-backed durable key-value slots.

use async_trait::async_trait;
use palette_core::error::{PaletteError, Result};
use palette_core::state::{ClientState, KeyValueStore};
use std::path::PathBuf;
use std::sync::Arc;

use super::AtomicTomlFile;
use crate::paths::PalettePaths;

/// [`KeyValueStore`] backed by `state.toml`.
///
/// Reads go to disk every time so a slot cleared by another client process is seen on the
/// next check. Writes are read-modify-write under the file lock, touching only their own key.
///
/// # Example
///
/// ```ignore
/// use palette_infrastructure::storage::TomlKeyValueStore;
///
/// let store = TomlKeyValueStore::open(&PalettePaths::default()).await?;
/// store.set("cc_theme", "mint").await?;
/// ```
#[derive(Clone)]
pub struct TomlKeyValueStore {
    file: Arc<AtomicTomlFile<ClientState>>,
}

impl TomlKeyValueStore {
    /// Opens the store at `path`. An existing file must decode.
    pub async fn new(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicTomlFile::<ClientState>::new(path));
        let loader = file.clone();
        let initial = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| PaletteError::internal(format!("Failed to join task: {}", e)))??
            .unwrap_or_default();

        tracing::debug!(path = %file.path().display(), slots = initial.entries.len(), "Opened client state");

        Ok(Self { file })
    }

    /// Opens the store at the standard `state.toml` location.
    pub async fn open(paths: &PalettePaths) -> Result<Self> {
        Self::new(paths.state_file()?).await
    }

    async fn write<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut ClientState) + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.update(ClientState::default(), mutate))
            .await
            .map_err(|e| PaletteError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| PaletteError::storage(format!("Failed to save client state: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for TomlKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file.clone();
        let loaded = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| PaletteError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| PaletteError::storage(format!("Failed to read client state: {}", e)))?
            .unwrap_or_default();

        Ok(loaded.get(key).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        tracing::debug!(key = %key, "Writing client state slot");
        self.write(move |state| state.set(key, value)).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        tracing::debug!(key = %key, "Removing client state slot");
        self.write(move |state| {
            state.remove(&key);
        })
        .await
    }
}
