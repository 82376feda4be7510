//! Auth request port.

use async_trait::async_trait;

use super::model::{AuthenticatedUser, Credentials};
use crate::outcome::{Ack, ApiOutcome};

/// Request layer for the auth endpoints.
///
/// Every call must carry the client's session credentials (cookies) so the service
/// can establish, use and drop its own authoritative session.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/login`
    async fn login(&self, credentials: &Credentials) -> ApiOutcome<AuthenticatedUser>;

    /// `POST /api/register`
    async fn register(&self, credentials: &Credentials) -> ApiOutcome<Ack>;

    /// `POST /api/logout`
    async fn logout(&self) -> ApiOutcome<Ack>;
}
