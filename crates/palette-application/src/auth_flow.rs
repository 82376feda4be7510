//! Login, registration and logout.

use palette_core::auth::{AuthApi, AuthMode, Credentials};
use palette_core::outcome::ApiOutcome;
use palette_core::ui::AuthView;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::alert_channel::AlertChannel;
use crate::session::SessionContext;

pub const INCOMPLETE_FORM: &str = "Please fill both fields!";
pub const GENERIC_FAILURE: &str = "Something went wrong!";
pub const REGISTERED: &str = "Account created successfully! You can sign in now";
pub const LOGGED_OUT: &str = "Logged out successfully";
pub const LOGOUT_FAILED: &str = "Logout failed.";

/// What a `submit` or `logout` ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// A field was blank; nothing was sent.
    Incomplete,
    SignedIn(String),
    Registered,
    SignedOut,
    /// Rejected by the service, a transport failure, or a local write failure.
    Failed,
}

/// Drives the auth popup: mode toggle, submit and logout.
///
/// # State machine
///
/// - `Login` ⇄ `Register` via [`toggle_mode`](Self::toggle_mode)
/// - a successful registration switches back to `Login`
/// - popup visibility is independent of the mode
///
/// Local session state only changes on a successful login or logout. A failed logout
/// deliberately keeps the local session, even though the service may have dropped its own.
pub struct AuthFlowController {
    /// Request layer for `/api/login`, `/api/register` and `/api/logout`
    api: Arc<dyn AuthApi>,
    /// Shared signed-in state
    session: Arc<SessionContext>,
    /// The popup
    view: Arc<dyn AuthView>,
    alerts: Arc<AlertChannel>,
    mode: Mutex<AuthMode>,
}

impl AuthFlowController {
    pub fn new(
        api: Arc<dyn AuthApi>,
        session: Arc<SessionContext>,
        view: Arc<dyn AuthView>,
        alerts: Arc<AlertChannel>,
    ) -> Self {
        Self {
            api,
            session,
            view,
            alerts,
            mode: Mutex::new(AuthMode::Login),
        }
    }

    /// Paints the indicator and popup labels from the stored session snapshot.
    ///
    /// The service is not asked whether the stored session is still valid.
    pub async fn initialize(&self) {
        let session = self.session.paint_indicator().await;
        let mode = *self.mode.lock().await;
        self.view.apply_labels(mode, mode.labels());
        tracing::debug!(
            signed_in = session.is_authenticated(),
            %mode,
            "[Auth] Initialized from stored session"
        );
    }

    pub async fn mode(&self) -> AuthMode {
        *self.mode.lock().await
    }

    pub async fn toggle_mode(&self) -> AuthMode {
        let mut mode = self.mode.lock().await;
        *mode = mode.toggled();
        self.view.apply_labels(*mode, mode.labels());
        *mode
    }

    pub fn open_popup(&self) {
        self.view.set_popup_visible(true);
    }

    pub fn dismiss_popup(&self) {
        self.view.set_popup_visible(false);
    }

    /// Submits the popup in its current mode.
    pub async fn submit(&self, username: &str, password: &str) -> AuthResult {
        let Some(credentials) = Credentials::from_input(username, password) else {
            self.view.warn(INCOMPLETE_FORM);
            return AuthResult::Incomplete;
        };

        let mode = *self.mode.lock().await;
        tracing::info!(%mode, username = %credentials.username, "[Auth] Submitting");
        match mode {
            AuthMode::Login => self.login(&credentials).await,
            AuthMode::Register => self.register(&credentials).await,
        }
    }

    async fn login(&self, credentials: &Credentials) -> AuthResult {
        match self.api.login(credentials).await {
            ApiOutcome::Success(user) => {
                if let Err(e) = self.session.set(&user.username).await {
                    tracing::error!(error = %e, "[Auth] Could not persist session");
                    self.alerts.error(GENERIC_FAILURE);
                    return AuthResult::Failed;
                }
                self.close_and_clear();
                self.alerts.success(format!("Welcome, {}!", user.username));
                AuthResult::SignedIn(user.username)
            }
            outcome => {
                self.report_failure(&outcome);
                AuthResult::Failed
            }
        }
    }

    async fn register(&self, credentials: &Credentials) -> AuthResult {
        match self.api.register(credentials).await {
            ApiOutcome::Success(_) => {
                let mut mode = self.mode.lock().await;
                *mode = AuthMode::Login;
                self.view.apply_labels(*mode, mode.labels());
                drop(mode);

                self.close_and_clear();
                self.alerts.success(REGISTERED);
                AuthResult::Registered
            }
            outcome => {
                self.report_failure(&outcome);
                AuthResult::Failed
            }
        }
    }

    /// Ends the session on the service, then locally.
    pub async fn logout(&self) -> AuthResult {
        match self.api.logout().await {
            ApiOutcome::Success(_) => {
                if let Err(e) = self.session.clear().await {
                    tracing::error!(error = %e, "[Auth] Could not clear session slot");
                    self.alerts.error(LOGOUT_FAILED);
                    return AuthResult::Failed;
                }
                self.dismiss_popup();
                self.alerts.success(LOGGED_OUT);
                AuthResult::SignedOut
            }
            outcome => {
                // Local session stays; the service may or may not have dropped its own.
                tracing::warn!(?outcome, "[Auth] Logout failed, keeping local session");
                self.alerts.error(LOGOUT_FAILED);
                AuthResult::Failed
            }
        }
    }

    fn close_and_clear(&self) {
        self.view.set_popup_visible(false);
        self.view.clear_fields();
    }

    fn report_failure<T>(&self, outcome: &ApiOutcome<T>) {
        match outcome {
            ApiOutcome::Transport { message } => {
                tracing::warn!(error = %message, "[Auth] Request failed");
                self.alerts.error(format!("Network error: {}", message));
            }
            rejected => {
                let message = rejected.error_message_or(GENERIC_FAILURE);
                tracing::info!(%message, "[Auth] Rejected by service");
                self.alerts.error(message);
            }
        }
    }
}
