//! Hazard log service.
//!
//! Orchestrates edits to the hazard log on top of an injected
//! [`ProjectStore`]. Every operation loads the project, applies one change,
//! stamps `updated_at` and saves it back, so the store always holds a
//! consistent project.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use hazardwise_core::{CauseId, HazardId, HazardwiseError, ImpactId, MitigationId, Result};
use serde::{Deserialize, Serialize};

use crate::level::{Likelihood, Severity};
use crate::services::project_store::ProjectStore;
use crate::summary::{highest_risk_for_project, HazardRiskSummary};
use crate::types::{
    Cause, Hazard, HazardImpact, Impact, Mitigation, MitigationImplementationClass, Project,
};

// ============================================================================
// Inputs
// ============================================================================

/// Input for adding a new impact to a hazard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewImpactInput {
    pub description: String,
    /// Severity label of the impact record.
    pub severity: Option<String>,
    /// Likelihood label of the link from the hazard.
    pub likelihood: Option<String>,
}

/// Where a mitigation is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum MitigationTarget {
    /// A hazard-specific mitigation.
    Hazard(HazardId),
    /// A mitigation that travels with a cause.
    Cause(CauseId),
}

/// Number of records removed by a prune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub causes: usize,
    pub impacts: usize,
    pub mitigations: usize,
}

impl PruneReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.causes + self.impacts + self.mitigations
    }
}

// ============================================================================
// Pure helpers
// ============================================================================

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HazardwiseError::invalid_input(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Canonicalize an optional likelihood label. Blank means "not yet chosen".
fn likelihood_label(value: Option<&str>) -> Result<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Ok(Some(v.parse::<Likelihood>()?.label().to_string())),
    }
}

/// Canonicalize an optional severity label. Blank means "not yet chosen".
fn severity_label(value: Option<&str>) -> Result<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Ok(Some(v.parse::<Severity>()?.label().to_string())),
    }
}

fn hazard_not_found(id: &HazardId) -> HazardwiseError {
    HazardwiseError::not_found("Hazard", Some(id.to_string()))
}

fn find_hazard<'a>(project: &'a mut Project, id: &HazardId) -> Result<&'a mut Hazard> {
    project.hazard_mut(id).ok_or_else(|| hazard_not_found(id))
}

/// Drop causes no hazard references.
pub fn prune_unused_causes(project: &mut Project) -> usize {
    let used: HashSet<&CauseId> = project.hazards.iter().flat_map(|h| &h.cause_ids).collect();
    let before = project.causes.len();
    let keep: Vec<Cause> = project
        .causes
        .iter()
        .filter(|c| used.contains(&c.id))
        .cloned()
        .collect();
    project.causes = keep;
    before - project.causes.len()
}

/// Drop impacts no hazard links.
pub fn prune_unused_impacts(project: &mut Project) -> usize {
    let used: HashSet<&ImpactId> = project
        .hazards
        .iter()
        .flat_map(|h| h.impacts.iter().map(|hi| &hi.impact_id))
        .collect();
    let before = project.impacts.len();
    let keep: Vec<Impact> = project
        .impacts
        .iter()
        .filter(|i| used.contains(&i.id))
        .cloned()
        .collect();
    project.impacts = keep;
    before - project.impacts.len()
}

/// Drop mitigations referenced neither by a hazard nor by a cause that a
/// hazard references.
pub fn prune_unused_mitigations(project: &mut Project) -> usize {
    let mut used: HashSet<MitigationId> = HashSet::new();
    for hazard in &project.hazards {
        used.extend(hazard.mitigation_ids.iter().cloned());
        for cause in project.causes_of(hazard) {
            used.extend(cause.mitigation_ids.iter().cloned());
        }
    }
    let before = project.mitigations.len();
    project.mitigations.retain(|m| used.contains(&m.id));
    before - project.mitigations.len()
}

/// Drop every unreferenced cause, impact and mitigation.
///
/// Causes go first so mitigations that only hung off a dropped cause are
/// dropped too.
pub fn prune_unused(project: &mut Project) -> PruneReport {
    let causes = prune_unused_causes(project);
    let impacts = prune_unused_impacts(project);
    let mitigations = prune_unused_mitigations(project);
    PruneReport {
        causes,
        impacts,
        mitigations,
    }
}

// ============================================================================
// Service
// ============================================================================

/// Service for editing the hazard log.
pub struct HazardService {
    store: Arc<dyn ProjectStore>,
}

impl HazardService {
    /// Create a new hazard service backed by the given store.
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Load, change and save the project in one step.
    async fn mutate<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Project) -> Result<T> + Send,
        T: Send,
    {
        let mut project = self.store.load().await?;
        let out = change(&mut project)?;
        project.updated_at = Some(Utc::now());
        self.store.save(&project).await?;
        Ok(out)
    }

    /// Current project.
    pub async fn project(&self) -> Result<Project> {
        self.store.load().await
    }

    /// Update the project header. `None` leaves a field unchanged.
    pub async fn update_details(
        &self,
        title: Option<String>,
        description: Option<String>,
        safety_officer: Option<String>,
    ) -> Result<Project> {
        self.mutate(move |project| {
            if let Some(title) = title {
                project.title = title.trim().to_string();
            }
            if let Some(description) = description {
                project.description = description.trim().to_string();
            }
            if let Some(officer) = safety_officer {
                project.safety_officer = officer.trim().to_string();
            }
            Ok(project.clone())
        })
        .await
    }

    /// Create a hazard with the next free id.
    pub async fn create_hazard(&self, description: &str) -> Result<Hazard> {
        let description = required_text("description", description)?;
        let hazard = self
            .mutate(move |project| {
                let id = HazardId::next(project.hazards.iter().map(|h| &h.id));
                let hazard = Hazard::new(id, description);
                project.hazards.push(hazard.clone());
                Ok(hazard)
            })
            .await?;

        tracing::info!(hazard_id = %hazard.id, "Created hazard");
        Ok(hazard)
    }

    /// Change a hazard's description.
    pub async fn update_hazard(&self, hazard_id: &HazardId, description: &str) -> Result<Hazard> {
        let description = required_text("description", description)?;
        self.mutate(|project| {
            let hazard = find_hazard(project, hazard_id)?;
            hazard.description = description;
            Ok(hazard.clone())
        })
        .await
    }

    /// Delete a hazard and everything only it referenced.
    pub async fn delete_hazard(&self, hazard_id: &HazardId) -> Result<PruneReport> {
        let report = self
            .mutate(|project| {
                let before = project.hazards.len();
                project.hazards.retain(|h| &h.id != hazard_id);
                if project.hazards.len() == before {
                    return Err(hazard_not_found(hazard_id));
                }
                Ok(prune_unused(project))
            })
            .await?;

        tracing::info!(
            hazard_id = %hazard_id,
            pruned = report.total(),
            "Deleted hazard"
        );
        Ok(report)
    }

    /// Create a cause and link it to a hazard.
    pub async fn add_cause(&self, hazard_id: &HazardId, description: &str) -> Result<Cause> {
        let description = required_text("description", description)?;
        self.mutate(|project| {
            if project.hazard(hazard_id).is_none() {
                return Err(hazard_not_found(hazard_id));
            }
            let cause = Cause {
                id: CauseId::next(project.causes.iter().map(|c| &c.id)),
                description,
                mitigation_ids: Vec::new(),
            };
            project.causes.push(cause.clone());
            find_hazard(project, hazard_id)?
                .cause_ids
                .push(cause.id.clone());
            Ok(cause)
        })
        .await
    }

    /// Link an existing cause to a hazard. Linking twice is a no-op.
    pub async fn link_cause(&self, hazard_id: &HazardId, cause_id: &CauseId) -> Result<Hazard> {
        self.mutate(|project| {
            if project.cause(cause_id).is_none() {
                return Err(HazardwiseError::not_found(
                    "Cause",
                    Some(cause_id.to_string()),
                ));
            }
            let hazard = find_hazard(project, hazard_id)?;
            if !hazard.cause_ids.contains(cause_id) {
                hazard.cause_ids.push(cause_id.clone());
            }
            Ok(hazard.clone())
        })
        .await
    }

    /// Unlink a cause from a hazard, then drop causes (and their
    /// mitigations) that no hazard references any more.
    pub async fn remove_cause(&self, hazard_id: &HazardId, cause_id: &CauseId) -> Result<Hazard> {
        self.mutate(|project| {
            find_hazard(project, hazard_id)?
                .cause_ids
                .retain(|c| c != cause_id);
            let causes = prune_unused_causes(project);
            let mitigations = prune_unused_mitigations(project);
            tracing::debug!(causes, mitigations, "Pruned after cause removal");
            project
                .hazard(hazard_id)
                .cloned()
                .ok_or_else(|| hazard_not_found(hazard_id))
        })
        .await
    }

    /// Create an impact record and link it to a hazard.
    pub async fn add_impact(&self, hazard_id: &HazardId, input: NewImpactInput) -> Result<Impact> {
        let description = required_text("description", &input.description)?;
        let severity = severity_label(input.severity.as_deref())?;
        let likelihood = likelihood_label(input.likelihood.as_deref())?;

        self.mutate(|project| {
            if project.hazard(hazard_id).is_none() {
                return Err(hazard_not_found(hazard_id));
            }
            let impact = Impact {
                id: ImpactId::next(project.impacts.iter().map(|i| &i.id)),
                description,
                severity,
            };
            project.impacts.push(impact.clone());
            find_hazard(project, hazard_id)?
                .impacts
                .push(HazardImpact::new(impact.id.clone(), likelihood));
            Ok(impact)
        })
        .await
    }

    /// Link an existing impact to a hazard, or update the likelihood of an
    /// existing link.
    pub async fn link_impact(
        &self,
        hazard_id: &HazardId,
        impact_id: &ImpactId,
        likelihood: Option<&str>,
    ) -> Result<Hazard> {
        let likelihood = likelihood_label(likelihood)?;
        self.mutate(|project| {
            if project.impact(impact_id).is_none() {
                return Err(HazardwiseError::not_found(
                    "Impact",
                    Some(impact_id.to_string()),
                ));
            }
            let hazard = find_hazard(project, hazard_id)?;
            match hazard.impacts.iter_mut().find(|hi| &hi.impact_id == impact_id) {
                Some(link) => link.likelihood = likelihood,
                None => hazard
                    .impacts
                    .push(HazardImpact::new(impact_id.clone(), likelihood)),
            }
            Ok(hazard.clone())
        })
        .await
    }

    /// Change the severity of an impact record.
    pub async fn set_impact_severity(
        &self,
        impact_id: &ImpactId,
        severity: Option<&str>,
    ) -> Result<Impact> {
        let severity = severity_label(severity)?;
        self.mutate(|project| {
            let impact = project
                .impacts
                .iter_mut()
                .find(|i| &i.id == impact_id)
                .ok_or_else(|| HazardwiseError::not_found("Impact", Some(impact_id.to_string())))?;
            impact.severity = severity;
            Ok(impact.clone())
        })
        .await
    }

    /// Unlink an impact from a hazard. The impact record stays available
    /// for linking until the next prune.
    pub async fn remove_impact(&self, hazard_id: &HazardId, impact_id: &ImpactId) -> Result<Hazard> {
        self.mutate(|project| {
            let hazard = find_hazard(project, hazard_id)?;
            hazard.impacts.retain(|hi| &hi.impact_id != impact_id);
            Ok(hazard.clone())
        })
        .await
    }

    /// Create a mitigation attached to a hazard or a cause.
    pub async fn add_mitigation(
        &self,
        target: &MitigationTarget,
        description: &str,
        implementation_class: MitigationImplementationClass,
    ) -> Result<Mitigation> {
        let description = required_text("description", description)?;
        self.mutate(|project| {
            let mitigation = Mitigation {
                id: MitigationId::next(project.mitigations.iter().map(|m| &m.id)),
                description,
                implementation_class,
            };
            attach_mitigation(project, target, &mitigation.id)?;
            project.mitigations.push(mitigation.clone());
            Ok(mitigation)
        })
        .await
    }

    /// Attach an existing mitigation to a hazard or a cause.
    pub async fn link_mitigation(
        &self,
        target: &MitigationTarget,
        mitigation_id: &MitigationId,
    ) -> Result<()> {
        self.mutate(|project| {
            if project.mitigation(mitigation_id).is_none() {
                return Err(HazardwiseError::not_found(
                    "Mitigation",
                    Some(mitigation_id.to_string()),
                ));
            }
            attach_mitigation(project, target, mitigation_id)
        })
        .await
    }

    /// Detach a hazard-specific mitigation.
    pub async fn remove_hazard_mitigation(
        &self,
        hazard_id: &HazardId,
        mitigation_id: &MitigationId,
    ) -> Result<Hazard> {
        self.mutate(|project| {
            let hazard = find_hazard(project, hazard_id)?;
            hazard.mitigation_ids.retain(|m| m != mitigation_id);
            Ok(hazard.clone())
        })
        .await
    }

    /// Detach a mitigation from a cause.
    pub async fn remove_cause_mitigation(
        &self,
        cause_id: &CauseId,
        mitigation_id: &MitigationId,
    ) -> Result<Cause> {
        self.mutate(|project| {
            let cause = project
                .cause_mut(cause_id)
                .ok_or_else(|| HazardwiseError::not_found("Cause", Some(cause_id.to_string())))?;
            cause.mitigation_ids.retain(|m| m != mitigation_id);
            Ok(cause.clone())
        })
        .await
    }

    /// Drop every unreferenced cause, impact and mitigation.
    pub async fn prune_unused(&self) -> Result<PruneReport> {
        let report = self.mutate(|project| Ok(prune_unused(project))).await?;
        tracing::debug!(
            causes = report.causes,
            impacts = report.impacts,
            mitigations = report.mitigations,
            "Pruned hazard log"
        );
        Ok(report)
    }

    /// Reset the store to an empty project.
    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await?;
        tracing::info!("Cleared hazard log");
        Ok(())
    }

    /// Highest risk of every hazard.
    pub async fn summary(&self) -> Result<Vec<HazardRiskSummary>> {
        let project = self.store.load().await?;
        Ok(highest_risk_for_project(&project))
    }
}

fn attach_mitigation(
    project: &mut Project,
    target: &MitigationTarget,
    mitigation_id: &MitigationId,
) -> Result<()> {
    let ids = match target {
        MitigationTarget::Hazard(hazard_id) => &mut find_hazard(project, hazard_id)?.mitigation_ids,
        MitigationTarget::Cause(cause_id) => {
            &mut project
                .cause_mut(cause_id)
                .ok_or_else(|| HazardwiseError::not_found("Cause", Some(cause_id.to_string())))?
                .mitigation_ids
        }
    };
    if !ids.contains(mitigation_id) {
        ids.push(mitigation_id.clone());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::project_store::InMemoryProjectStore;

    fn service() -> (HazardService, Arc<InMemoryProjectStore>) {
        let store = Arc::new(InMemoryProjectStore::new());
        (HazardService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_hazard_allocates_ids() {
        let (service, store) = service();
        let first = service.create_hazard("Wrong patient record").await.unwrap();
        let second = service.create_hazard("  Delayed alert ").await.unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
        assert_eq!(second.description, "Delayed alert");

        let project = store.snapshot();
        assert_eq!(project.hazards.len(), 2);
        assert!(project.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_create_hazard_rejects_blank() {
        let (service, store) = service();
        let err = service.create_hazard("   ").await.unwrap_err();
        assert!(err.is_invalid_input());
        assert!(store.snapshot().hazards.is_empty());
    }

    #[tokio::test]
    async fn test_add_impact_canonicalizes_labels() {
        let (service, store) = service();
        let hazard = service.create_hazard("h").await.unwrap();
        let impact = service
            .add_impact(
                &hazard.id,
                NewImpactInput {
                    description: "Overdose".to_string(),
                    severity: Some("catastrophic".to_string()),
                    likelihood: Some("very low".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(impact.severity.as_deref(), Some("Catastrophic"));
        let project = store.snapshot();
        assert_eq!(
            project.hazards[0].impacts[0].likelihood.as_deref(),
            Some("Rare")
        );
    }

    #[tokio::test]
    async fn test_add_impact_rejects_unknown_label() {
        let (service, _) = service();
        let hazard = service.create_hazard("h").await.unwrap();
        let err = service
            .add_impact(
                &hazard.id,
                NewImpactInput {
                    description: "Overdose".to_string(),
                    severity: Some("Fatal".to_string()),
                    likelihood: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_unknown_hazard_is_not_found() {
        let (service, _) = service();
        let err = service
            .add_cause(&HazardId::new("42"), "Unclear UI")
            .await
            .unwrap_err();
        assert!(matches!(err, HazardwiseError::NotFound { .. }));
    }

    #[test]
    fn test_prune_unused_keeps_cause_mitigations() {
        let mut project = Project::new("p");
        let mut hazard = Hazard::new(HazardId::new("1"), "h");
        hazard.cause_ids.push(CauseId::new("1"));
        hazard.mitigation_ids.push(MitigationId::new("1"));
        project.hazards.push(hazard);
        project.causes.push(Cause {
            id: CauseId::new("1"),
            description: "kept".to_string(),
            mitigation_ids: vec![MitigationId::new("2")],
        });
        project.causes.push(Cause {
            id: CauseId::new("2"),
            description: "orphan".to_string(),
            mitigation_ids: vec![MitigationId::new("3")],
        });
        for id in ["1", "2", "3"] {
            project.mitigations.push(Mitigation {
                id: MitigationId::new(id),
                description: id.to_string(),
                implementation_class: MitigationImplementationClass::Organisation,
            });
        }
        project.impacts.push(Impact {
            id: ImpactId::new("1"),
            description: "unlinked".to_string(),
            severity: None,
        });

        let report = prune_unused(&mut project);
        assert_eq!(
            report,
            PruneReport {
                causes: 1,
                impacts: 1,
                mitigations: 1
            }
        );
        let kept: Vec<&str> = project.mitigations.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(kept, ["1", "2"]);
    }
}
