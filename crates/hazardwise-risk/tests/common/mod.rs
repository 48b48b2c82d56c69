//! Common test utilities for hazardwise-risk integration tests.
//!
//! Every test gets its own in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use hazardwise_risk::{HazardService, InMemoryProjectStore, NewImpactInput};

/// A service wired to a fresh in-memory store.
pub struct TestContext {
    pub store: Arc<InMemoryProjectStore>,
    pub service: HazardService,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryProjectStore::new());
        let service = HazardService::new(store.clone());
        Self { store, service }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Impact input with both labels filled.
pub fn impact_input(description: &str, severity: &str, likelihood: &str) -> NewImpactInput {
    NewImpactInput {
        description: description.to_string(),
        severity: Some(severity.to_string()),
        likelihood: Some(likelihood.to_string()),
    }
}
