//! Auth domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which action the auth popup submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Service path the mode submits to.
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "/api/login",
            AuthMode::Register => "/api/register",
        }
    }

    pub fn labels(self) -> AuthLabels {
        match self {
            AuthMode::Login => AuthLabels {
                title: "Sign In",
                action: "Sign In",
                toggle_hint: "No account? Register here!",
            },
            AuthMode::Register => AuthLabels {
                title: "Create Account",
                action: "Register",
                toggle_hint: "Already have an account? Sign in!",
            },
        }
    }
}

/// Prompt text for the popup in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthLabels {
    pub title: &'static str,
    pub action: &'static str,
    pub toggle_hint: &'static str,
}

/// Body of `POST /api/login` and `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trims both fields; `None` when either ends up empty.
    pub fn from_input(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Success body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
}
