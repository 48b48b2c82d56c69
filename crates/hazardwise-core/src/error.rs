//! Error Types
//!
//! This module provides the error type shared by the HazardWise crates.
//!
//! # Example
//!
//! ```
//! use hazardwise_core::{HazardwiseError, Result};
//!
//! fn find_hazard(id: &str) -> Result<String> {
//!     if id.is_empty() {
//!         return Err(HazardwiseError::not_found("Hazard", None));
//!     }
//!     Ok(format!("Hazard {}", id))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Standardized error type for HazardWise.
///
/// # Variants
///
/// - `InvalidInput` - Input failed validation, e.g. a risk level outside 1..=5
/// - `NotFound` - A referenced hazard, cause, impact or mitigation does not exist
/// - `Io` - An output sink or the persisted project could not be accessed
/// - `Storage` - The persisted project exists but could not be decoded or encoded
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HazardwiseError {
    /// Input validation failure.
    ///
    /// Fails fast: no partial result is ever produced alongside it.
    #[error("Invalid input on field '{field}': {message}")]
    InvalidInput {
        /// The field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Requested record was not found.
    #[error("{resource} not found{}", id.as_ref().map(|i| format!(": {i}")).unwrap_or_default())]
    NotFound {
        /// The type of record that was not found (e.g. "Hazard", "Cause")
        resource: String,
        /// Optional identifier of the record
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },

    /// I/O failure on a file or output sink. Reported, never retried.
    #[error("I/O error: {0}")]
    Io(String),

    /// The persisted project could not be decoded or encoded.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl HazardwiseError {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a `NotFound` error.
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Whether this error is an input validation failure.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<std::io::Error> for HazardwiseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Type alias for Results using `HazardwiseError`.
pub type Result<T> = std::result::Result<T, HazardwiseError>;
