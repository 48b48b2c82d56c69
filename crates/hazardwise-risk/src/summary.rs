//! Per-hazard risk summaries.
//!
//! Each hazard-to-impact link is assessed from the link's likelihood and the
//! linked impact's severity. Links missing either value are skipped.

use hazardwise_core::{HazardId, ImpactId};
use serde::Serialize;

use crate::assessment::{assess_by_label, rating_color, RiskResult};
use crate::types::{Hazard, HazardImpact, Impact, Project};

/// Assess one hazard-to-impact link.
///
/// Returns `None` when the link has no likelihood, the impact is unknown or
/// has no severity, or either label is unrecognised.
#[must_use]
pub fn assess_hazard_impact(link: &HazardImpact, impacts: &[Impact]) -> Option<RiskResult> {
    let likelihood = link.likelihood.as_deref()?;
    let impact = impacts.iter().find(|i| i.id == link.impact_id)?;
    assess_by_label(impact.severity.as_deref(), Some(likelihood))
}

/// The highest assessed risk of a hazard, with its display colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    /// Impact that produced the highest score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_id: Option<ImpactId>,
    /// 0 when nothing could be assessed.
    pub score: u8,
    /// Rating label, empty when nothing could be assessed.
    pub rating: String,
    /// Hex colour, empty when nothing could be assessed.
    pub color: String,
}

impl RiskSummary {
    /// Placeholder for a hazard with no fully specified impact.
    #[must_use]
    pub fn unassessed() -> Self {
        Self {
            impact_id: None,
            score: 0,
            rating: String::new(),
            color: String::new(),
        }
    }

    /// Whether this is the placeholder.
    #[must_use]
    pub fn is_unassessed(&self) -> bool {
        self.score == 0
    }

    fn from_result(impact_id: &ImpactId, result: &RiskResult) -> Self {
        let rating = result.rating.label();
        Self {
            impact_id: Some(impact_id.clone()),
            score: result.score,
            rating: rating.to_string(),
            color: rating_color(rating).to_string(),
        }
    }
}

impl Default for RiskSummary {
    fn default() -> Self {
        Self::unassessed()
    }
}

/// Highest risk across a hazard's impact links.
///
/// Ties keep the first link in iteration order.
#[must_use]
pub fn highest_risk(hazard: &Hazard, impacts: &[Impact]) -> RiskSummary {
    let mut best: Option<(&ImpactId, RiskResult)> = None;
    for link in &hazard.impacts {
        let Some(result) = assess_hazard_impact(link, impacts) else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, b)| result.score > b.score) {
            best = Some((&link.impact_id, result));
        }
    }

    best.map_or_else(RiskSummary::unassessed, |(id, result)| {
        RiskSummary::from_result(id, &result)
    })
}

/// Summary line for one hazard of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardRiskSummary {
    pub hazard_id: HazardId,
    pub description: String,
    pub risk: RiskSummary,
}

/// Highest risk of every hazard, in hazard order.
#[must_use]
pub fn highest_risk_for_project(project: &Project) -> Vec<HazardRiskSummary> {
    project
        .hazards
        .iter()
        .map(|hazard| HazardRiskSummary {
            hazard_id: hazard.id.clone(),
            description: hazard.description.clone(),
            risk: highest_risk(hazard, &project.impacts),
        })
        .collect()
}
