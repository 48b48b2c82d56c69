//! Project storage trait and in-memory implementation.

use async_trait::async_trait;
use std::sync::RwLock;

use hazardwise_core::HazardwiseError;

use crate::types::Project;

/// Trait for loading and saving the hazard log.
///
/// A store holds exactly one project. Implementations must return an empty
/// project from `load` when nothing has been saved yet.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Load the current project.
    async fn load(&self) -> Result<Project, HazardwiseError>;

    /// Replace the stored project.
    async fn save(&self, project: &Project) -> Result<(), HazardwiseError>;

    /// Discard the stored project.
    async fn clear(&self) -> Result<(), HazardwiseError>;
}

/// In-memory implementation of `ProjectStore` for testing.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    project: RwLock<Project>,
}

impl InMemoryProjectStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            project: RwLock::new(Project::default()),
        }
    }

    /// Create a store pre-loaded with a project.
    #[must_use]
    pub fn with_project(project: Project) -> Self {
        Self {
            project: RwLock::new(project),
        }
    }

    /// Snapshot of the stored project (for testing).
    pub fn snapshot(&self) -> Project {
        self.project
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn load(&self) -> Result<Project, HazardwiseError> {
        Ok(self.snapshot())
    }

    async fn save(&self, project: &Project) -> Result<(), HazardwiseError> {
        *self.project.write().unwrap_or_else(|e| e.into_inner()) = project.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), HazardwiseError> {
        *self.project.write().unwrap_or_else(|e| e.into_inner()) = Project::default();
        Ok(())
    }
}
