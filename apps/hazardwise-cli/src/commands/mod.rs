//! Command implementations

pub mod assess;
pub mod cause;
pub mod clear;
pub mod completions;
pub mod hazard;
pub mod impact;
pub mod mitigation;
pub mod project;
pub mod report;
pub mod summary;
