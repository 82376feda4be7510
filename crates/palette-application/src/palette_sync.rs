//! Palette list, selection and saved colors, kept in step with the service.

use palette_core::outcome::ApiOutcome;
use palette_core::palette::{ColorId, Palette, PaletteApi, PaletteId};
use palette_core::ui::PaletteView;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::alert_channel::AlertChannel;
use crate::session::SessionContext;

pub const LOAD_FAILED: &str = "Error loading palettes";
pub const COLORS_FAILED: &str = "Error loading colors";
pub const SAVE_REQUIRES_SESSION: &str = "You must be signed in to save palettes";
pub const NAME_REQUIRED: &str = "Enter a palette name";
pub const SAVE_FAILED: &str = "Error saving palette";
pub const SAVED: &str = "Palette saved!";
pub const NETWORK_ERROR: &str = "Network error";
pub const DELETE_REQUIRES_SESSION: &str = "You must be signed in to delete palettes";
pub const NOTHING_SELECTED: &str = "No palette selected";
pub const CONFIRM_DELETE: &str = "Delete this palette?";
pub const DELETE_FAILED: &str = "Delete failed";
pub const DELETED: &str = "Palette deleted";
pub const EDIT_REQUIRES_SESSION: &str = "You must be signed in to edit colors";
pub const COLOR_DELETED: &str = "Color deleted";

/// How a user-triggered palette action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The request succeeded and the view was refreshed.
    Applied,
    /// A local precondition failed; nothing was sent.
    Refused,
    /// The user declined the confirmation.
    Cancelled,
    /// The request was rejected or never completed.
    Failed,
    /// The response arrived after teardown and was dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct SyncState {
    /// Last successfully loaded list, in service order.
    palettes: Vec<Palette>,
    selected: Option<PaletteId>,
}

/// Picks the palette to select after a list load.
///
/// Priority: `preferred` if listed, else `current` if still listed, else the last palette.
pub fn resolve_selection(
    palettes: &[Palette],
    preferred: Option<PaletteId>,
    current: Option<PaletteId>,
) -> Option<PaletteId> {
    let listed = |id: &PaletteId| palettes.iter().any(|p| p.id == *id);
    preferred
        .filter(listed)
        .or_else(|| current.filter(listed))
        .or_else(|| palettes.last().map(|p| p.id))
}

/// Loads, creates, selects and deletes palettes and their colors.
///
/// # Refresh-after-write
///
/// Every successful mutation (create, delete palette, delete color) is followed by a full
/// re-fetch of `GET /api/palettes`; the local list is never patched speculatively. What
/// the view shows is therefore always the latest successful server response. A failed load
/// leaves the previous rendering in place.
///
/// # Concurrency
///
/// Handlers are not serialized. Overlapping requests each render when they resolve, so the
/// last response wins. After [`teardown`](Self::teardown) every response is dropped without
/// touching the view or the alert channel.
pub struct PaletteSyncController {
    api: Arc<dyn PaletteApi>,
    session: Arc<SessionContext>,
    view: Arc<dyn PaletteView>,
    alerts: Arc<AlertChannel>,
    state: Mutex<SyncState>,
    torn_down: AtomicBool,
}

impl PaletteSyncController {
    pub fn new(
        api: Arc<dyn PaletteApi>,
        session: Arc<SessionContext>,
        view: Arc<dyn PaletteView>,
        alerts: Arc<AlertChannel>,
    ) -> Self {
        Self {
            api,
            session,
            view,
            alerts,
            state: Mutex::new(SyncState::default()),
            torn_down: AtomicBool::new(false),
        }
    }

    /// Initial load when the page opens.
    pub async fn initialize(&self) {
        self.load_palettes(None).await;
    }

    /// Fetches the full list, renders the selector and then the selected palette's colors.
    pub async fn load_palettes(&self, preferred: Option<PaletteId>) {
        if self.is_torn_down() {
            return;
        }
        let outcome = self.api.list_palettes().await;
        if self.is_torn_down() {
            tracing::debug!("[PaletteSync] Dropping palette list after teardown");
            return;
        }

        let palettes = match outcome {
            ApiOutcome::Success(palettes) => palettes,
            failure => {
                tracing::warn!(?failure, "[PaletteSync] Could not load palettes");
                self.alerts.error(LOAD_FAILED);
                return;
            }
        };

        let mut state = self.state.lock().await;
        if palettes.is_empty() {
            state.palettes.clear();
            state.selected = None;
            drop(state);
            self.view.render_placeholder();
            self.view.clear_colors();
            tracing::debug!("[PaletteSync] No palettes yet");
            return;
        }

        let selected = resolve_selection(&palettes, preferred, state.selected);
        state.selected = selected;
        state.palettes = palettes;
        if let Some(id) = selected {
            self.view.render_options(&state.palettes, id);
        }
        tracing::debug!(
            count = state.palettes.len(),
            ?selected,
            "[PaletteSync] Palettes loaded"
        );
        drop(state);

        self.load_palette_colors().await;
    }

    /// Re-fetches the list and renders the colors of the selected palette.
    ///
    /// There is no single-palette endpoint, so the whole list is requested and the
    /// selected entry looked up by id.
    pub async fn load_palette_colors(&self) {
        if self.is_torn_down() {
            return;
        }
        self.view.clear_colors();
        let Some(id) = self.selected().await else {
            return;
        };

        let outcome = self.api.list_palettes().await;
        if self.is_torn_down() {
            return;
        }

        match outcome {
            ApiOutcome::Success(palettes) => {
                let Some(palette) = palettes.into_iter().find(|p| p.id == id) else {
                    tracing::debug!(id, "[PaletteSync] Selected palette no longer listed");
                    return;
                };
                self.view.render_colors(&palette);

                let mut state = self.state.lock().await;
                if let Some(cached) = state.palettes.iter_mut().find(|p| p.id == id) {
                    *cached = palette;
                }
            }
            failure => {
                tracing::warn!(id, ?failure, "[PaletteSync] Could not load colors");
                self.alerts.error(COLORS_FAILED);
            }
        }
    }

    /// Creates a palette named `name` (trimmed) and selects it.
    pub async fn create_palette(&self, name: &str) -> SyncOutcome {
        if self.session.get().await.is_none() {
            self.alerts.error(SAVE_REQUIRES_SESSION);
            return SyncOutcome::Refused;
        }
        let name = name.trim();
        if name.is_empty() {
            self.alerts.error(NAME_REQUIRED);
            return SyncOutcome::Refused;
        }

        tracing::info!(name, "[PaletteSync] Creating palette");
        let outcome = self.api.create_palette(name).await;
        if self.is_torn_down() {
            return SyncOutcome::Discarded;
        }

        match outcome {
            ApiOutcome::Success(created) => {
                self.view.clear_name_input();
                self.alerts.success(SAVED);
                self.load_palettes(created.id).await;
                SyncOutcome::Applied
            }
            ApiOutcome::Transport { message } => {
                tracing::warn!(error = %message, "[PaletteSync] Create failed");
                self.alerts.error(NETWORK_ERROR);
                SyncOutcome::Failed
            }
            rejected => {
                self.alerts.error(rejected.error_message_or(SAVE_FAILED));
                SyncOutcome::Failed
            }
        }
    }

    /// Deletes the selected palette after confirmation.
    pub async fn delete_palette(&self) -> SyncOutcome {
        if self.session.get().await.is_none() {
            self.alerts.error(DELETE_REQUIRES_SESSION);
            return SyncOutcome::Refused;
        }
        let Some(id) = self.selected().await else {
            self.alerts.error(NOTHING_SELECTED);
            return SyncOutcome::Refused;
        };
        if !self.view.confirm(CONFIRM_DELETE).await {
            return SyncOutcome::Cancelled;
        }

        tracing::info!(id, "[PaletteSync] Deleting palette");
        let outcome = self.api.delete_palette(id).await;
        if self.is_torn_down() {
            return SyncOutcome::Discarded;
        }

        match outcome {
            ApiOutcome::Success(_) => {
                self.alerts.success(DELETED);
                {
                    let mut state = self.state.lock().await;
                    if state.selected == Some(id) {
                        state.selected = None;
                    }
                }
                self.load_palettes(None).await;
                SyncOutcome::Applied
            }
            failure => {
                tracing::warn!(id, ?failure, "[PaletteSync] Delete failed");
                self.alerts.error(DELETE_FAILED);
                SyncOutcome::Failed
            }
        }
    }

    /// Deletes one color and reloads the selected palette's colors.
    ///
    /// Any HTTP answer, including a failure status, is reported as a deletion and followed
    /// by a reload; the reload shows whether the color is really gone. Only a request that
    /// never completed is reported as an error.
    pub async fn delete_color(&self, palette_id: PaletteId, color_id: ColorId) -> SyncOutcome {
        if self.session.get().await.is_none() {
            self.alerts.error(EDIT_REQUIRES_SESSION);
            return SyncOutcome::Refused;
        }

        tracing::info!(palette_id, color_id, "[PaletteSync] Deleting color");
        let outcome = self.api.delete_color(palette_id, color_id).await;
        if self.is_torn_down() {
            return SyncOutcome::Discarded;
        }

        match outcome {
            ApiOutcome::Transport { message } => {
                tracing::warn!(error = %message, "[PaletteSync] Color delete failed");
                self.alerts.error(NETWORK_ERROR);
                return SyncOutcome::Failed;
            }
            ApiOutcome::Rejected { status, error } => {
                tracing::warn!(
                    status,
                    ?error,
                    "[PaletteSync] Color delete answered with failure status; reporting as deleted"
                );
            }
            ApiOutcome::Success(_) => {}
        }

        self.alerts.success(COLOR_DELETED);
        self.load_palette_colors().await;
        SyncOutcome::Applied
    }

    /// Changes the selection and reloads colors only; the list is not re-fetched.
    pub async fn select_palette(&self, id: PaletteId) {
        self.state.lock().await.selected = Some(id);
        self.load_palette_colors().await;
    }

    /// Stops rendering. Responses still in flight become no-ops.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        tracing::debug!("[PaletteSync] Torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub async fn selected(&self) -> Option<PaletteId> {
        self.state.lock().await.selected
    }

    /// The last successfully loaded list.
    pub async fn palettes(&self) -> Vec<Palette> {
        self.state.lock().await.palettes.clone()
    }
}
