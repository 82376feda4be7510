//! Tagged results returned by the request layer.

use serde::{Deserialize, Serialize};

/// Outcome of a single request against the palette service.
///
/// The request layer decides success or failure once, including the service's
/// irregular cases (a create that answers non-2xx but still returns an `id` is a
/// `Success`). Controllers only pattern-match on the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ApiOutcome<T> {
    /// The service acknowledged the request.
    Success(T),
    /// The service answered with a failure status.
    Rejected {
        status: u16,
        /// The `error` field of the response body, when present.
        error: Option<String>,
    },
    /// The request never completed, or the body could not be read.
    Transport { message: String },
}

impl<T> ApiOutcome<T> {
    pub fn rejected(status: u16, error: Option<String>) -> Self {
        Self::Rejected { status, error }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the success value, discarding the failure detail.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The server-provided error message, or `fallback` for every other failure.
    pub fn error_message_or(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                error: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Acknowledgement with no interesting payload (logout, deletes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ack;
