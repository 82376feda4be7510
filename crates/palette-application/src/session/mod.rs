//! Session application services.
//!
//! The session context is the single shared source of truth for "who is signed in".
//! It is built once by the host and handed to every controller that needs it.

mod context;

pub use context::SessionContext;
