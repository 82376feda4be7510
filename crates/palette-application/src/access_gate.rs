//! Page-level gate for the palette features.

use palette_core::ui::PaletteView;
use std::sync::Arc;

use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Open { username: String },
    /// Controls are disabled and the sign-in prompt is up.
    Blocked,
}

impl GateDecision {
    pub fn is_open(&self) -> bool {
        matches!(self, GateDecision::Open { .. })
    }
}

/// Decides once, when the palette view initializes, whether palette features are usable.
///
/// Individual actions still re-check the session right before their request; the gate
/// only covers the initial page state.
pub struct AccessGate {
    session: Arc<SessionContext>,
}

impl AccessGate {
    pub fn new(session: Arc<SessionContext>) -> Self {
        Self { session }
    }

    pub async fn evaluate(&self, view: &dyn PaletteView) -> GateDecision {
        match self.session.get().await {
            Some(username) => {
                tracing::debug!(%username, "[Gate] Palette features enabled");
                GateDecision::Open { username }
            }
            None => {
                tracing::info!("[Gate] No session, palette features disabled");
                view.disable_controls();
                view.show_sign_in_prompt();
                GateDecision::Blocked
            }
        }
    }
}
