//! Application layer for the palette client.
//!
//! Controllers here coordinate the core ports (request layer, key-value store, UI views)
//! into the page behavior: session handling, the auth popup, the access gate, palette
//! synchronization and the alert channel.

pub mod access_gate;
pub mod alert_channel;
pub mod auth_flow;
pub mod page;
pub mod palette_sync;
pub mod session;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use access_gate::{AccessGate, GateDecision};
pub use alert_channel::AlertChannel;
pub use auth_flow::{AuthFlowController, AuthResult};
pub use page::{Dispatch, PalettePage};
pub use palette_sync::{PaletteSyncController, SyncOutcome};
pub use session::SessionContext;
pub use theme::ThemePreference;
