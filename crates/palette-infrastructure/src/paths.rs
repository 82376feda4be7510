//! Path management for palette-sync client files.
//!
//! ```text
//! ~/.config/palette-sync/      # Config directory (or the override directory)
//! ├── config.toml              # ClientConfig
//! ├── state.toml               # Durable key-value slots (session, theme)
//! └── logs/                    # palette.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "palette-sync";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for palette_core::PaletteError {
    fn from(err: PathError) -> Self {
        palette_core::PaletteError::config(err.to_string())
    }
}

/// Resolves every file the client reads or writes.
///
/// With an override directory (CLI `--config-dir`, tests) all files live directly under it;
/// otherwise the platform config directory is used.
#[derive(Debug, Clone, Default)]
pub struct PalettePaths {
    override_dir: Option<PathBuf>,
}

impl PalettePaths {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// Returns the palette-sync configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.override_dir {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// File backing the durable key-value slots.
    pub fn state_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("state.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        // Some CI sandboxes have no HOME; only check the suffix when resolution succeeds.
        if let Ok(dir) = PalettePaths::default().config_dir() {
            assert!(dir.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_override_dir() {
        let paths = PalettePaths::new(Some(PathBuf::from("/tmp/palette-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/palette-test/config.toml")
        );
        assert_eq!(
            paths.state_file().unwrap(),
            PathBuf::from("/tmp/palette-test/state.toml")
        );
        assert!(paths.logs_dir().unwrap().ends_with("logs"));
    }
}
