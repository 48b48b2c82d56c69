//! User settings stored in config.json

use std::path::Path;

use hazardwise_docx::{DEFAULT_AUTHOR, DEFAULT_PAGE_MARGIN};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Settings read from config.json. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Creator written into exported documents
    pub author: String,
    /// Page margin of exported documents, in twips
    pub page_margin: u32,
    /// Report title used when the project has none
    pub default_title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            page_margin: DEFAULT_PAGE_MARGIN,
            default_title: None,
        }
    }
}

impl Config {
    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            CliError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_margin, 720);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"author":"Clinical Safety Team"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.author, "Clinical Safety Team");
        assert_eq!(config.page_margin, 720);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(err, CliError::Config(_)));
    }
}
