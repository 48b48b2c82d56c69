//! Type definitions for the hazard log.
//!
//! A project is a safety case: a list of hazards plus shared pools of
//! causes, impacts and mitigations that hazards reference by id.
//!
//! - Impact records carry the severity of the harm.
//! - The link from a hazard to an impact carries the likelihood, so the same
//!   impact can be more or less likely for different hazards.

use std::fmt;

use chrono::{DateTime, Utc};
use hazardwise_core::{CauseId, HazardId, ImpactId, MitigationId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Who implements a mitigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MitigationImplementationClass {
    /// Local controls: training, policies, monitoring, configuration.
    #[default]
    Organisation,
    /// Controls delivered by the supplier.
    Manufacturer,
}

impl MitigationImplementationClass {
    /// Both classes in display order.
    pub const ALL: [MitigationImplementationClass; 2] = [Self::Organisation, Self::Manufacturer];

    /// Normalize a stored value. Anything other than "manufacturer" is
    /// treated as an organisation control.
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("manufacturer") {
            Self::Manufacturer
        } else {
            Self::Organisation
        }
    }

    /// Stable key used in persisted data.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Organisation => "organisation",
            Self::Manufacturer => "manufacturer",
        }
    }

    /// Heading shown above a group of mitigations.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Organisation => "Implemented by your organisation",
            Self::Manufacturer => "Implemented by the manufacturer",
        }
    }

    /// Guidance shown when choosing the class.
    #[must_use]
    pub fn help_text(self) -> &'static str {
        match self {
            Self::Organisation => {
                "Use this for local controls such as training, policies, monitoring, and configuration decisions."
            }
            Self::Manufacturer => {
                "Use this for controls delivered by the supplier, such as product changes, bug fixes, or vendor-managed safeguards."
            }
        }
    }
}

impl From<String> for MitigationImplementationClass {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl fmt::Display for MitigationImplementationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A potential source of harm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: HazardId,
    pub description: String,
    #[serde(default)]
    pub cause_ids: Vec<CauseId>,
    /// Hazard-specific mitigations (not attached to a cause).
    #[serde(default)]
    pub mitigation_ids: Vec<MitigationId>,
    /// Linked impacts, each with the likelihood for this hazard.
    #[serde(default)]
    pub impacts: Vec<HazardImpact>,
}

impl Hazard {
    /// Create a hazard with no links.
    pub fn new(id: HazardId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            cause_ids: Vec::new(),
            mitigation_ids: Vec::new(),
            impacts: Vec::new(),
        }
    }

    /// Whether the hazard links the given impact.
    #[must_use]
    pub fn links_impact(&self, impact_id: &ImpactId) -> bool {
        self.impacts.iter().any(|hi| &hi.impact_id == impact_id)
    }
}

/// Link from a hazard to an impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardImpact {
    pub impact_id: ImpactId,
    /// Likelihood label; `None` while the form is incomplete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<String>,
}

impl HazardImpact {
    pub fn new(impact_id: ImpactId, likelihood: Option<String>) -> Self {
        Self {
            impact_id,
            likelihood,
        }
    }
}

/// A condition that could lead to a hazard. Shared between hazards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub id: CauseId,
    pub description: String,
    /// Mitigations that always travel with this cause.
    #[serde(default)]
    pub mitigation_ids: Vec<MitigationId>,
}

/// A harmful outcome with an assigned severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    pub id: ImpactId,
    pub description: String,
    /// Severity label; `None` while the form is incomplete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// A control reducing likelihood or severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mitigation {
    pub id: MitigationId,
    pub description: String,
    #[serde(default)]
    pub implementation_class: MitigationImplementationClass,
}

/// Mitigations of one implementation class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MitigationGroup<'a> {
    pub class: MitigationImplementationClass,
    pub label: &'static str,
    pub help_text: &'static str,
    pub items: Vec<&'a Mitigation>,
}

/// Group mitigations by implementation class.
///
/// Always returns both groups, organisation first, even when empty.
#[must_use]
pub fn group_by_implementation_class<'a, I>(items: I) -> Vec<MitigationGroup<'a>>
where
    I: IntoIterator<Item = &'a Mitigation>,
{
    let mut groups: Vec<MitigationGroup<'a>> = MitigationImplementationClass::ALL
        .iter()
        .map(|&class| MitigationGroup {
            class,
            label: class.label(),
            help_text: class.help_text(),
            items: Vec::new(),
        })
        .collect();

    for item in items {
        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.class == item.implementation_class)
        {
            group.items.push(item);
        }
    }
    groups
}

// ============================================================================
// Project
// ============================================================================

/// The whole persisted hazard log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub safety_officer: String,
    pub hazards: Vec<Hazard>,
    pub causes: Vec<Cause>,
    pub impacts: Vec<Impact>,
    pub mitigations: Vec<Mitigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// An empty project with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hazard(&self, id: &HazardId) -> Option<&Hazard> {
        self.hazards.iter().find(|h| &h.id == id)
    }

    pub fn hazard_mut(&mut self, id: &HazardId) -> Option<&mut Hazard> {
        self.hazards.iter_mut().find(|h| &h.id == id)
    }

    #[must_use]
    pub fn cause(&self, id: &CauseId) -> Option<&Cause> {
        self.causes.iter().find(|c| &c.id == id)
    }

    pub fn cause_mut(&mut self, id: &CauseId) -> Option<&mut Cause> {
        self.causes.iter_mut().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn impact(&self, id: &ImpactId) -> Option<&Impact> {
        self.impacts.iter().find(|i| &i.id == id)
    }

    #[must_use]
    pub fn mitigation(&self, id: &MitigationId) -> Option<&Mitigation> {
        self.mitigations.iter().find(|m| &m.id == id)
    }

    /// Causes linked to a hazard, in link order. Dangling ids are skipped.
    #[must_use]
    pub fn causes_of<'a>(&'a self, hazard: &'a Hazard) -> Vec<&'a Cause> {
        hazard
            .cause_ids
            .iter()
            .filter_map(|id| self.cause(id))
            .collect()
    }

    /// Mitigations referenced by the given ids. Dangling ids are skipped.
    #[must_use]
    pub fn mitigations_of<'a>(&'a self, ids: &'a [MitigationId]) -> Vec<&'a Mitigation> {
        ids.iter().filter_map(|id| self.mitigation(id)).collect()
    }
}
