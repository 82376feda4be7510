use serde::{Deserialize, Serialize};

use crate::palette::{ColorId, PaletteId};

/// Every user interaction the controllers react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Indicator clicked, or the sign-in prompt accepted.
    OpenAuthPopup,
    /// Click on the popup background.
    DismissAuthPopup,
    ToggleAuthMode,
    SubmitAuth {
        username: String,
        password: String,
    },
    Logout,
    ChangeTheme {
        theme: String,
    },
    CreatePalette {
        name: String,
    },
    DeletePalette,
    SelectPalette {
        id: PaletteId,
    },
    DeleteColor {
        palette_id: PaletteId,
        color_id: ColorId,
    },
}

/// Handler groups registered independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventGroup {
    /// Auth popup and indicator; present on every page.
    Auth,
    /// Theme selector; present on every page.
    Theme,
    /// Palette editing; only registered when the access gate opens.
    Palette,
}

impl UiEvent {
    pub fn group(&self) -> EventGroup {
        match self {
            UiEvent::OpenAuthPopup
            | UiEvent::DismissAuthPopup
            | UiEvent::ToggleAuthMode
            | UiEvent::SubmitAuth { .. }
            | UiEvent::Logout => EventGroup::Auth,
            UiEvent::ChangeTheme { .. } => EventGroup::Theme,
            UiEvent::CreatePalette { .. }
            | UiEvent::DeletePalette
            | UiEvent::SelectPalette { .. }
            | UiEvent::DeleteColor { .. } => EventGroup::Palette,
        }
    }
}
