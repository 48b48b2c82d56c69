//! Strongly Typed Identifiers
//!
//! Hazard log records are keyed by short numeric strings ("1", "2", ...).
//! Each record kind gets its own newtype so a cause id can never be passed
//! where a mitigation id is expected.
//!
//! Ids loaded from older projects may not be numeric (e.g. "H01"); they are
//! kept verbatim and simply ignored when allocating the next id.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Numeric value of the identifier, if it is a plain integer.
            #[must_use]
            pub fn numeric(&self) -> Option<u64> {
                self.0.trim().parse().ok()
            }

            /// Allocate the next identifier: one more than the largest
            /// numeric id in `existing`, or "1" when there is none.
            pub fn next<'a, I>(existing: I) -> Self
            where
                I: IntoIterator<Item = &'a Self>,
            {
                let max = existing.into_iter().filter_map(Self::numeric).max();
                Self(max.map_or(1, |m| m.saturating_add(1)).to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of a hazard in the hazard log.
    HazardId
);
record_id!(
    /// Identifier of a cause shared between hazards.
    CauseId
);
record_id!(
    /// Identifier of an impact record.
    ImpactId
);
record_id!(
    /// Identifier of a mitigation (control).
    MitigationId
);
