//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// Configuration paths for the hazardwise CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
    /// Path to project.json (the persisted hazard log)
    pub project_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/hazardwise/
    /// - macOS: ~/Library/Application Support/hazardwise/
    /// - Windows: %APPDATA%\hazardwise\
    pub fn new() -> CliResult<Self> {
        Ok(Self::in_dir(Self::get_config_dir()?))
    }

    /// Paths rooted at an explicit directory
    pub fn in_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            config_file: config_dir.join("config.json"),
            project_file: config_dir.join("project.json"),
            config_dir,
        }
    }

    /// Use a different project file, keeping the config location
    #[must_use]
    pub fn with_project_file(mut self, project_file: &Path) -> Self {
        self.project_file = project_file.to_path_buf();
        self
    }

    /// Get the configuration directory, respecting HAZARDWISE_CONFIG_DIR env var
    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var("HAZARDWISE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("hazardwise"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths_in_dir() {
        let paths = ConfigPaths::in_dir("/tmp/hazardwise-test");
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/hazardwise-test"));
        assert!(paths.config_file.ends_with("config.json"));
        assert!(paths.project_file.ends_with("project.json"));
    }

    #[test]
    fn test_project_file_override() {
        let paths = ConfigPaths::in_dir("/tmp/hazardwise-test")
            .with_project_file(Path::new("/srv/cases/triage.json"));
        assert_eq!(paths.project_file, PathBuf::from("/srv/cases/triage.json"));
        assert!(paths.config_file.starts_with("/tmp/hazardwise-test"));
    }
}
