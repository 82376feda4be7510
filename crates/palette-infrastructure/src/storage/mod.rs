//! Storage layer for atomic file operations.

mod atomic_toml;
mod toml_key_value_store;

pub use atomic_toml::AtomicTomlFile;
pub use toml_key_value_store::TomlKeyValueStore;
