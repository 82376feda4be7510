//! Durable key-value slot trait.

use async_trait::async_trait;

use crate::error::Result;

/// Durable client-side key-value storage.
///
/// Survives restarts; only an explicit `remove` (or wiping the backing file) clears a slot.
/// This is a cache of the last server acknowledgement, not a security boundary.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a slot to storage.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a slot. Removing a missing slot is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
