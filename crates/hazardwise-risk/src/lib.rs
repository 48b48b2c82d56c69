//! HazardWise risk assessment and hazard log.
//!
//! - [`assessment`] - the 5x5 risk matrix, ratings and label-based assessment
//! - [`level`] - likelihood and severity scales
//! - [`summary`] - highest risk per hazard
//! - [`types`] - hazard log records
//! - [`services`] - `ProjectStore` and `HazardService`
//!
//! # Example
//!
//! ```
//! use hazardwise_risk::{assess_by_label, Likelihood, Severity, assess_levels};
//!
//! let result = assess_levels(Likelihood::Likely, Severity::Major);
//! assert_eq!(result.score, 4);
//!
//! assert!(assess_by_label(Some("Major"), None).is_none());
//! ```

pub mod assessment;
pub mod level;
pub mod services;
pub mod summary;
pub mod types;

pub use assessment::{
    assess, assess_by_label, assess_levels, assess_numeric, rating_color, risk_matrix,
    MatrixCell, RiskRating, RiskResult, RISK_MATRIX, UNRATED_COLOR,
};
pub use level::{Likelihood, Severity};
pub use services::{
    HazardService, InMemoryProjectStore, MitigationTarget, NewImpactInput, ProjectStore,
    PruneReport,
};
pub use summary::{
    assess_hazard_impact, highest_risk, highest_risk_for_project, HazardRiskSummary, RiskSummary,
};
pub use types::{
    group_by_implementation_class, Cause, Hazard, HazardImpact, Impact, Mitigation,
    MitigationGroup, MitigationImplementationClass, Project,
};
