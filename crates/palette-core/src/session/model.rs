//! Session domain model.

use serde::{Deserialize, Serialize};

/// The locally cached record of who is signed in.
///
/// Created on a successful login, destroyed on logout. It gates UI features only;
/// the service keeps its own authoritative session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// A stored empty username counts as no session.
    pub fn from_slot(slot: Option<String>) -> Self {
        Self {
            username: slot.filter(|name| !name.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
