//! The palette page: handler registration and event routing.

use palette_core::ui::{EventGroup, PaletteView, UiEvent};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::access_gate::{AccessGate, GateDecision};
use crate::auth_flow::AuthFlowController;
use crate::palette_sync::PaletteSyncController;
use crate::theme::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// No handler is registered for the event's group.
    Ignored,
}

/// Owns which handler groups are live and routes [`UiEvent`]s to the controllers.
///
/// Auth and theme handlers are registered on every open. Palette handlers are registered
/// only when the access gate opens, so while gated a palette event reaches nothing.
pub struct PalettePage {
    auth: Arc<AuthFlowController>,
    palettes: Arc<PaletteSyncController>,
    theme: Arc<ThemePreference>,
    gate: AccessGate,
    view: Arc<dyn PaletteView>,
    registered: Mutex<HashSet<EventGroup>>,
}

impl PalettePage {
    pub fn new(
        auth: Arc<AuthFlowController>,
        palettes: Arc<PaletteSyncController>,
        theme: Arc<ThemePreference>,
        gate: AccessGate,
        view: Arc<dyn PaletteView>,
    ) -> Self {
        Self {
            auth,
            palettes,
            theme,
            gate,
            view,
            registered: Mutex::new(HashSet::new()),
        }
    }

    /// Page load: paint stored state, evaluate the gate, register handlers, load data.
    pub async fn open(&self) -> GateDecision {
        self.theme.apply_saved().await;
        self.auth.initialize().await;

        let decision = self.gate.evaluate(self.view.as_ref()).await;
        {
            let mut registered = self.registered.lock().await;
            registered.clear();
            registered.insert(EventGroup::Auth);
            registered.insert(EventGroup::Theme);
            if decision.is_open() {
                registered.insert(EventGroup::Palette);
            }
        }

        if decision.is_open() {
            self.palettes.initialize().await;
        }
        decision
    }

    pub async fn is_registered(&self, group: EventGroup) -> bool {
        self.registered.lock().await.contains(&group)
    }

    pub async fn dispatch(&self, event: UiEvent) -> Dispatch {
        let group = event.group();
        if !self.is_registered(group).await {
            tracing::debug!(?group, "[Page] No handler registered, ignoring event");
            return Dispatch::Ignored;
        }

        match event {
            UiEvent::OpenAuthPopup => self.auth.open_popup(),
            UiEvent::DismissAuthPopup => self.auth.dismiss_popup(),
            UiEvent::ToggleAuthMode => {
                self.auth.toggle_mode().await;
            }
            UiEvent::SubmitAuth { username, password } => {
                let result = self.auth.submit(&username, &password).await;
                tracing::debug!(?result, "[Page] Auth submitted");
            }
            UiEvent::Logout => {
                let result = self.auth.logout().await;
                tracing::debug!(?result, "[Page] Logout handled");
            }
            UiEvent::ChangeTheme { theme } => {
                if let Err(e) = self.theme.set(&theme).await {
                    tracing::warn!(error = %e, "[Page] Could not save theme");
                }
            }
            UiEvent::CreatePalette { name } => {
                self.palettes.create_palette(&name).await;
            }
            UiEvent::DeletePalette => {
                self.palettes.delete_palette().await;
            }
            UiEvent::SelectPalette { id } => self.palettes.select_palette(id).await,
            UiEvent::DeleteColor {
                palette_id,
                color_id,
            } => {
                self.palettes.delete_color(palette_id, color_id).await;
            }
        }
        Dispatch::Handled
    }

    /// Page unload. Pending palette responses become no-ops.
    pub async fn close(&self) {
        self.registered.lock().await.clear();
        self.palettes.teardown();
    }
}
