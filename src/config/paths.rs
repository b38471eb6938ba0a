//! Path management for Dolla
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (`--config-dir` or `DOLLA_CONFIG_DIR`)
//! 2. The platform config directory, e.g. `~/.config/dolla` on Linux,
//!    `~/Library/Application Support/dolla` on macOS, `%APPDATA%\dolla` on
//!    Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::DollaError;

/// Manages all paths used by Dolla
#[derive(Debug, Clone)]
pub struct DollaPaths {
    base_dir: PathBuf,
}

impl DollaPaths {
    /// Resolve paths, preferring `override_dir` when given
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform config
    /// directory cannot be determined.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, DollaError> {
        match override_dir {
            Some(dir) => Ok(Self::with_base_dir(dir.to_path_buf())),
            None => {
                let dirs = ProjectDirs::from("", "", "dolla").ok_or_else(|| {
                    DollaError::Config("Could not determine a home directory".into())
                })?;
                Ok(Self::with_base_dir(dirs.config_dir().to_path_buf()))
            }
        }
    }

    /// Create DollaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), DollaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DollaError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DollaPaths::resolve(Some(temp_dir.path())).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp_dir.path().join("nested").join("dolla"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
