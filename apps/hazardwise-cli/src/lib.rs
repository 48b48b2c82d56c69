//! hazardwise CLI library
//!
//! Exposes the CLI's building blocks for integration testing. The binary
//! lives in main.rs.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use hazardwise_risk::HazardService;

use config::{Config, ConfigPaths};
use error::CliResult;
use output::OutputFormat;
use store::JsonFileProjectStore;

/// Everything a command needs to run
pub struct AppContext {
    pub paths: ConfigPaths,
    pub config: Config,
    pub service: HazardService,
    pub format: OutputFormat,
}

impl AppContext {
    /// Resolve paths, load settings and open the project store
    pub fn load(project_override: Option<&Path>, format: OutputFormat) -> CliResult<Self> {
        let mut paths = ConfigPaths::new()?;
        if let Some(project_file) = project_override {
            paths = paths.with_project_file(project_file);
        }
        let config = Config::load(&paths.config_file)?;
        let store = Arc::new(JsonFileProjectStore::new(paths.project_file.clone()));

        tracing::debug!(
            project = %paths.project_file.display(),
            config = %paths.config_file.display(),
            "Resolved paths"
        );

        Ok(Self {
            paths,
            config,
            service: HazardService::new(store),
            format,
        })
    }

    /// Whether output should be JSON
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
