//! Durable client state: model and storage port.

pub mod model;
pub mod repository;

pub use model::{ClientState, DEFAULT_THEME, SESSION_KEY, THEME_KEY};
pub use repository::KeyValueStore;
