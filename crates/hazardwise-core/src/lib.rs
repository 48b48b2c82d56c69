//! HazardWise Core Library
//!
//! Shared types for the HazardWise hazard log.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (HazardId, CauseId, ImpactId, MitigationId)
//! - [`error`] - Standardized error types (HazardwiseError)
//!
//! # Example
//!
//! ```
//! use hazardwise_core::{HazardId, HazardwiseError, Result};
//!
//! let existing = vec![HazardId::new("1"), HazardId::new("4")];
//! assert_eq!(HazardId::next(&existing).as_str(), "5");
//!
//! fn example() -> Result<()> {
//!     Err(HazardwiseError::invalid_input("likelihood", "must be between 1 and 5"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{HazardwiseError, Result};
pub use ids::{CauseId, HazardId, ImpactId, MitigationId};
