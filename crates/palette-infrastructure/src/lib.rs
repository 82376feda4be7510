pub mod config_service;
pub mod http;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http::HttpPaletteClient;
pub use crate::paths::PalettePaths;
pub use crate::storage::TomlKeyValueStore;
