//! Fakes for the core ports, shared by the controller tests.

use async_trait::async_trait;
use palette_core::alert::Alert;
use palette_core::auth::{AuthApi, AuthLabels, AuthMode, AuthenticatedUser, Credentials};
use palette_core::error::{PaletteError, Result};
use palette_core::outcome::{Ack, ApiOutcome};
use palette_core::palette::{Color, ColorId, CreatedPalette, Palette, PaletteApi, PaletteId, Rgb};
use palette_core::state::{KeyValueStore, SESSION_KEY};
use palette_core::ui::{AlertSurface, AuthView, IdentityIndicator, PaletteView, ThemeView};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::alert_channel::AlertChannel;
use crate::auth_flow::AuthFlowController;
use crate::palette_sync::PaletteSyncController;
use crate::session::SessionContext;
use crate::theme::ThemePreference;

// ============================================================================
// Storage
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PaletteError::storage("read failed"));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PaletteError::storage("write failed"));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PaletteError::storage("write failed"));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

// ============================================================================
// Views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorEvent {
    SignedIn(String),
    SignedOut,
}

#[derive(Default)]
pub struct RecordingIndicator {
    events: Mutex<Vec<IndicatorEvent>>,
}

impl RecordingIndicator {
    pub fn events(&self) -> Vec<IndicatorEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl IdentityIndicator for RecordingIndicator {
    fn show_signed_in(&self, username: &str) {
        self.events
            .lock()
            .unwrap()
            .push(IndicatorEvent::SignedIn(username.to_string()));
    }

    fn show_signed_out(&self) {
        self.events.lock().unwrap().push(IndicatorEvent::SignedOut);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Display(String, bool),
    Hide,
}

#[derive(Default)]
pub struct RecordingAlertSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingAlertSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The most recently displayed alert as `(message, is_success)`.
    pub fn last_display(&self) -> Option<(String, bool)> {
        self.events().into_iter().rev().find_map(|e| match e {
            SurfaceEvent::Display(message, ok) => Some((message, ok)),
            SurfaceEvent::Hide => None,
        })
    }
}

impl AlertSurface for RecordingAlertSurface {
    fn display(&self, alert: &Alert) {
        self.events
            .lock()
            .unwrap()
            .push(SurfaceEvent::Display(alert.message.clone(), alert.is_success));
    }

    fn hide(&self) {
        self.events.lock().unwrap().push(SurfaceEvent::Hide);
    }
}

#[derive(Default)]
pub struct RecordingAuthView {
    pub labels: Mutex<Option<(AuthMode, AuthLabels)>>,
    pub popup_visible: AtomicBool,
    pub cleared: Mutex<usize>,
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingAuthView {
    pub fn mode(&self) -> Option<AuthMode> {
        self.labels.lock().unwrap().map(|(mode, _)| mode)
    }

    pub fn title(&self) -> Option<&'static str> {
        self.labels.lock().unwrap().map(|(_, labels)| labels.title)
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible.load(Ordering::SeqCst)
    }

    pub fn cleared(&self) -> usize {
        *self.cleared.lock().unwrap()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl AuthView for RecordingAuthView {
    fn apply_labels(&self, mode: AuthMode, labels: AuthLabels) {
        *self.labels.lock().unwrap() = Some((mode, labels));
    }

    fn set_popup_visible(&self, visible: bool) {
        self.popup_visible.store(visible, Ordering::SeqCst);
    }

    fn clear_fields(&self) {
        *self.cleared.lock().unwrap() += 1;
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// One rendered saved-color entry: name, hex, rgb label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedColor {
    pub id: ColorId,
    pub name: String,
    pub hex: String,
    pub rgb: String,
}

#[derive(Default)]
pub struct RecordingPaletteView {
    /// Selector entries as `(value, label)`; the placeholder has no value.
    options: Mutex<Vec<(Option<PaletteId>, String)>>,
    selected: Mutex<Option<PaletteId>>,
    colors: Mutex<Vec<RenderedColor>>,
    name_input_cleared: Mutex<usize>,
    disabled: AtomicBool,
    prompt_shown: AtomicBool,
    confirm_answer: AtomicBool,
    confirm_prompts: Mutex<Vec<String>>,
}

impl RecordingPaletteView {
    pub fn options(&self) -> Vec<(Option<PaletteId>, String)> {
        self.options.lock().unwrap().clone()
    }

    pub fn selected(&self) -> Option<PaletteId> {
        *self.selected.lock().unwrap()
    }

    pub fn colors(&self) -> Vec<RenderedColor> {
        self.colors.lock().unwrap().clone()
    }

    pub fn name_input_cleared(&self) -> usize {
        *self.name_input_cleared.lock().unwrap()
    }

    pub fn disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    pub fn prompt_shown(&self) -> bool {
        self.prompt_shown.load(Ordering::SeqCst)
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirm_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaletteView for RecordingPaletteView {
    fn render_placeholder(&self) {
        *self.options.lock().unwrap() =
            vec![(None, palette_core::palette::NO_PALETTES_LABEL.to_string())];
        *self.selected.lock().unwrap() = None;
    }

    fn render_options(&self, palettes: &[Palette], selected: PaletteId) {
        *self.options.lock().unwrap() = palettes
            .iter()
            .map(|p| (Some(p.id), p.name.clone()))
            .collect();
        *self.selected.lock().unwrap() = Some(selected);
    }

    fn clear_colors(&self) {
        self.colors.lock().unwrap().clear();
    }

    fn render_colors(&self, palette: &Palette) {
        *self.colors.lock().unwrap() = palette
            .colors
            .iter()
            .map(|c| RenderedColor {
                id: c.id,
                name: c.name.clone(),
                hex: c.hex.clone(),
                rgb: c.rgb_label(),
            })
            .collect();
    }

    fn clear_name_input(&self) {
        *self.name_input_cleared.lock().unwrap() += 1;
    }

    fn disable_controls(&self) {
        self.disabled.store(true, Ordering::SeqCst);
    }

    fn show_sign_in_prompt(&self) {
        self.prompt_shown.store(true, Ordering::SeqCst);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.confirm_prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingThemeView {
    applied: Mutex<Vec<String>>,
}

impl RecordingThemeView {
    pub fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }
}

impl ThemeView for RecordingThemeView {
    fn apply_theme(&self, theme: &str) {
        self.applied.lock().unwrap().push(theme.to_string());
    }
}

// ============================================================================
// Request layer
// ============================================================================

/// Scripted auth endpoints. Unscripted calls answer with a transport failure.
#[derive(Default)]
pub struct FakeAuthApi {
    login: Mutex<Option<ApiOutcome<AuthenticatedUser>>>,
    register: Mutex<Option<ApiOutcome<Ack>>>,
    logout: Mutex<Option<ApiOutcome<Ack>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAuthApi {
    pub fn on_login(&self, outcome: ApiOutcome<AuthenticatedUser>) {
        *self.login.lock().unwrap() = Some(outcome);
    }

    pub fn on_register(&self, outcome: ApiOutcome<Ack>) {
        *self.register.lock().unwrap() = Some(outcome);
    }

    pub fn on_logout(&self, outcome: ApiOutcome<Ack>) {
        *self.logout.lock().unwrap() = Some(outcome);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> ApiOutcome<AuthenticatedUser> {
        self.record(format!("POST /api/login {}", credentials.username));
        self.login
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| ApiOutcome::transport("unscripted"))
    }

    async fn register(&self, credentials: &Credentials) -> ApiOutcome<Ack> {
        self.record(format!("POST /api/register {}", credentials.username));
        self.register
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| ApiOutcome::transport("unscripted"))
    }

    async fn logout(&self) -> ApiOutcome<Ack> {
        self.record("POST /api/logout");
        self.logout
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| ApiOutcome::transport("unscripted"))
    }
}

/// Scripted palette endpoints with a request log.
pub struct FakePaletteApi {
    list: Mutex<ApiOutcome<Vec<Palette>>>,
    create: Mutex<ApiOutcome<CreatedPalette>>,
    delete_palette: Mutex<ApiOutcome<Ack>>,
    delete_color: Mutex<ApiOutcome<Ack>>,
    requests: Mutex<Vec<String>>,
}

impl Default for FakePaletteApi {
    fn default() -> Self {
        Self {
            list: Mutex::new(ApiOutcome::Success(Vec::new())),
            create: Mutex::new(ApiOutcome::transport("unscripted")),
            delete_palette: Mutex::new(ApiOutcome::Success(Ack)),
            delete_color: Mutex::new(ApiOutcome::Success(Ack)),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl FakePaletteApi {
    pub fn on_list(&self, outcome: ApiOutcome<Vec<Palette>>) {
        *self.list.lock().unwrap() = outcome;
    }

    pub fn set_palettes(&self, palettes: Vec<Palette>) {
        self.on_list(ApiOutcome::Success(palettes));
    }

    pub fn on_create(&self, outcome: ApiOutcome<CreatedPalette>) {
        *self.create.lock().unwrap() = outcome;
    }

    pub fn on_delete_palette(&self, outcome: ApiOutcome<Ack>) {
        *self.delete_palette.lock().unwrap() = outcome;
    }

    pub fn on_delete_color(&self, outcome: ApiOutcome<Ack>) {
        *self.delete_color.lock().unwrap() = outcome;
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == request).count()
    }

    fn record(&self, request: impl Into<String>) {
        self.requests.lock().unwrap().push(request.into());
    }
}

#[async_trait]
impl PaletteApi for FakePaletteApi {
    async fn list_palettes(&self) -> ApiOutcome<Vec<Palette>> {
        self.record("GET /api/palettes");
        self.list.lock().unwrap().clone()
    }

    async fn create_palette(&self, name: &str) -> ApiOutcome<CreatedPalette> {
        self.record(format!("POST /api/palettes {}", name));
        self.create.lock().unwrap().clone()
    }

    async fn delete_palette(&self, id: PaletteId) -> ApiOutcome<Ack> {
        self.record(format!("DELETE /api/palettes/{}", id));
        self.delete_palette.lock().unwrap().clone()
    }

    async fn delete_color(&self, palette_id: PaletteId, color_id: ColorId) -> ApiOutcome<Ack> {
        self.record(format!("DELETE /api/palettes/{}/colors/{}", palette_id, color_id));
        self.delete_color.lock().unwrap().clone()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn palette(id: PaletteId, name: &str, colors: Vec<Color>) -> Palette {
    Palette {
        id,
        name: name.to_string(),
        colors,
    }
}

pub fn color(id: ColorId, name: &str, hex: &str, rgb: (i64, i64, i64)) -> Color {
    Color {
        id,
        name: name.to_string(),
        hex: hex.to_string(),
        rgb: Some(Rgb::new(rgb.0, rgb.1, rgb.2)),
    }
}

/// Every controller wired against fakes, the way a host wires them against real ports.
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub indicator: Arc<RecordingIndicator>,
    pub surface: Arc<RecordingAlertSurface>,
    pub auth_view: Arc<RecordingAuthView>,
    pub palette_view: Arc<RecordingPaletteView>,
    pub theme_view: Arc<RecordingThemeView>,
    pub auth_api: Arc<FakeAuthApi>,
    pub palette_api: Arc<FakePaletteApi>,
    pub session: Arc<SessionContext>,
    pub auth: Arc<AuthFlowController>,
    pub palettes: Arc<PaletteSyncController>,
    pub theme: Arc<ThemePreference>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let indicator = Arc::new(RecordingIndicator::default());
        let surface = Arc::new(RecordingAlertSurface::default());
        let auth_view = Arc::new(RecordingAuthView::default());
        let palette_view = Arc::new(RecordingPaletteView::default());
        let theme_view = Arc::new(RecordingThemeView::default());
        let auth_api = Arc::new(FakeAuthApi::default());
        let palette_api = Arc::new(FakePaletteApi::default());

        let session = Arc::new(SessionContext::new(store.clone(), indicator.clone()));
        let alerts = Arc::new(AlertChannel::new(
            surface.clone(),
            Duration::from_millis(2500),
        ));
        let auth = Arc::new(AuthFlowController::new(
            auth_api.clone(),
            session.clone(),
            auth_view.clone(),
            alerts.clone(),
        ));
        let palettes = Arc::new(PaletteSyncController::new(
            palette_api.clone(),
            session.clone(),
            palette_view.clone(),
            alerts.clone(),
        ));
        let theme = Arc::new(ThemePreference::new(store.clone(), theme_view.clone()));

        Self {
            store,
            indicator,
            surface,
            auth_view,
            palette_view,
            theme_view,
            auth_api,
            palette_api,
            session,
            auth,
            palettes,
            theme,
        }
    }

    /// A harness whose durable slot already names `username`.
    pub async fn signed_in(username: &str) -> Self {
        let harness = Self::new();
        harness
            .store
            .set(SESSION_KEY, username)
            .await
            .expect("memory store write");
        harness
    }

    /// The most recent alert as `(message, is_success)`.
    pub fn last_alert(&self) -> Option<(String, bool)> {
        self.surface.last_display()
    }
}
