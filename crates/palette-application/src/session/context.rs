use palette_core::error::Result;
use palette_core::session::Session;
use palette_core::state::{KeyValueStore, SESSION_KEY};
use palette_core::ui::IdentityIndicator;
use std::sync::Arc;

/// Who is signed in, backed by the durable `cc_logged_user` slot.
///
/// The slot is the only persistence backend; the indicator is repainted on every
/// `set`/`clear`. No network access and no authenticity check happen here.
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    indicator: Arc<dyn IdentityIndicator>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>, indicator: Arc<dyn IdentityIndicator>) -> Self {
        Self { store, indicator }
    }

    /// Current username, read from the slot on every call.
    ///
    /// An unreadable slot counts as signed out, so gated actions fail closed.
    pub async fn get(&self) -> Option<String> {
        self.current().await.username
    }

    pub async fn current(&self) -> Session {
        match self.store.get(SESSION_KEY).await {
            Ok(slot) => Session::from_slot(slot),
            Err(e) => {
                tracing::warn!(error = %e, "[Session] Could not read session slot; treating as signed out");
                Session::anonymous()
            }
        }
    }

    /// Persists `username` and shows it in the indicator.
    pub async fn set(&self, username: &str) -> Result<()> {
        self.store.set(SESSION_KEY, username).await?;
        self.indicator.show_signed_in(username);
        tracing::info!(username, "[Session] Signed in");
        Ok(())
    }

    /// Removes the slot and resets the indicator.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_KEY).await?;
        self.indicator.show_signed_out();
        tracing::info!("[Session] Signed out");
        Ok(())
    }

    /// Paints the indicator from the stored snapshot without contacting the service.
    pub async fn paint_indicator(&self) -> Session {
        let session = self.current().await;
        match session.username() {
            Some(username) => self.indicator.show_signed_in(username),
            None => self.indicator.show_signed_out(),
        }
        session
    }
}
