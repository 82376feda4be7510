//! Domain layer for palette-sync.
//!
//! Models, the shared error type, the tagged request outcome and the ports
//! (storage, request layer, UI) the application layer is written against.

pub mod alert;
pub mod auth;
pub mod config;
pub mod error;
pub mod outcome;
pub mod palette;
pub mod session;
pub mod state;
pub mod ui;

// Re-export common types
pub use error::{PaletteError, Result};
pub use outcome::{Ack, ApiOutcome};
