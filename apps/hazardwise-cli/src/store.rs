//! JSON file project store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hazardwise_core::HazardwiseError;
use hazardwise_risk::{Project, ProjectStore};

/// Persists the project as a pretty-printed JSON file.
///
/// A missing file loads as an empty project. Parent directories are created
/// on save.
#[derive(Debug, Clone)]
pub struct JsonFileProjectStore {
    path: PathBuf,
}

impl JsonFileProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: &std::io::Error) -> HazardwiseError {
        HazardwiseError::Io(format!("{}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl ProjectStore for JsonFileProjectStore {
    async fn load(&self) -> Result<Project, HazardwiseError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No project file, starting empty");
                return Ok(Project::default());
            }
            Err(e) => return Err(self.io_error(&e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            HazardwiseError::Storage(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, project: &Project) -> Result<(), HazardwiseError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(&e))?;
        }

        let json = serde_json::to_string_pretty(project)
            .map_err(|e| HazardwiseError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(&e))?;

        tracing::info!(
            path = %self.path.display(),
            hazards = project.hazards.len(),
            "Saved project"
        );
        Ok(())
    }

    async fn clear(&self) -> Result<(), HazardwiseError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(&e)),
        }
    }
}
