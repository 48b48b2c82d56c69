//! Services for the hazard log.

pub mod hazard;
pub mod project_store;

pub use hazard::{
    prune_unused, HazardService, MitigationTarget, NewImpactInput, PruneReport,
};
pub use project_store::{InMemoryProjectStore, ProjectStore};
