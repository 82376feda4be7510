//! UI ports.
//!
//! Controllers never touch a concrete UI. A host (terminal, webview, test) implements
//! these traits and feeds user interactions back in as [`UiEvent`]s.

mod event;

pub use event::{EventGroup, UiEvent};

use async_trait::async_trait;

use crate::alert::Alert;
use crate::auth::{AuthLabels, AuthMode};
use crate::palette::{Palette, PaletteId};

/// The single alert slot.
pub trait AlertSurface: Send + Sync {
    /// Shows `alert`, replacing whatever was visible.
    fn display(&self, alert: &Alert);

    fn hide(&self);
}

/// The "signed in as ..." indicator and the logout control next to it.
pub trait IdentityIndicator: Send + Sync {
    fn show_signed_in(&self, username: &str);

    fn show_signed_out(&self);
}

/// The login/register popup.
pub trait AuthView: Send + Sync {
    fn apply_labels(&self, mode: AuthMode, labels: AuthLabels);

    fn set_popup_visible(&self, visible: bool);

    /// Empties the username and password fields.
    fn clear_fields(&self);

    /// Blocking inline warning, used when the form is incomplete.
    fn warn(&self, message: &str);
}

/// The palette selector, the saved-color list and the palette name input.
#[async_trait]
pub trait PaletteView: Send + Sync {
    /// Replaces the selector with the single "no palettes" entry.
    fn render_placeholder(&self);

    /// Replaces the selector with one entry per palette, `selected` highlighted.
    fn render_options(&self, palettes: &[Palette], selected: PaletteId);

    fn clear_colors(&self);

    /// Renders every color of `palette` with its own delete control.
    fn render_colors(&self, palette: &Palette);

    fn clear_name_input(&self);

    /// Disables every interactive control, visually and functionally.
    fn disable_controls(&self);

    /// Modal prompt offering to open the auth popup.
    fn show_sign_in_prompt(&self);

    /// Interactive yes/no confirmation.
    async fn confirm(&self, prompt: &str) -> bool;
}

pub trait ThemeView: Send + Sync {
    fn apply_theme(&self, theme: &str);
}
