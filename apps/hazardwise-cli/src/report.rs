//! Safety case report builder.
//!
//! Turns a project into document blocks. This is the only place where the
//! risk model and the document exporter meet.

use chrono::{DateTime, Utc};
use hazardwise_docx::{Cell, DocxBlock, Paragraph, Table};
use hazardwise_risk::{
    assess_hazard_impact, group_by_implementation_class, highest_risk, risk_matrix, Hazard,
    Likelihood, Project, RiskRating, RiskSummary, Severity,
};

use crate::config::Config;

/// Title used when neither the project nor the config has one
pub const FALLBACK_TITLE: &str = "Clinical Safety Case";

/// Highlight colour for a rating, matching its traffic-light colour.
pub fn rating_highlight(rating: RiskRating) -> &'static str {
    match rating {
        RiskRating::Acceptable => "green",
        RiskRating::Undesirable => "yellow",
        RiskRating::UnacceptableWithoutFurtherMitigation | RiskRating::Unacceptable => "red",
    }
}

/// Document title for a project.
pub fn report_title(project: &Project, config: &Config) -> String {
    let title = project.title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    config
        .default_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

/// Build the report blocks for a project.
pub fn build_report(project: &Project, title: &str, generated: DateTime<Utc>) -> Vec<DocxBlock> {
    let mut blocks: Vec<DocxBlock> = vec![Paragraph::title(title).into()];

    if !project.description.trim().is_empty() {
        blocks.push(Paragraph::new(project.description.trim()).into());
    }
    if !project.safety_officer.trim().is_empty() {
        blocks.push(
            Paragraph::new(format!(
                "Clinical safety officer: {}",
                project.safety_officer.trim()
            ))
            .bold()
            .into(),
        );
    }
    blocks.push(
        Paragraph::new(format!("Generated {}", generated.format("%Y-%m-%d %H:%M UTC")))
            .spacing(0, 240)
            .into(),
    );

    blocks.push(Paragraph::heading1("Risk matrix").into());
    blocks.push(matrix_table().into());

    blocks.push(Paragraph::heading1("Hazard summary").into());
    if project.hazards.is_empty() {
        blocks.push(Paragraph::new("No hazards recorded.").into());
        return blocks;
    }
    blocks.push(summary_table(project).into());

    blocks.push(Paragraph::heading1("Hazard log").into());
    for hazard in &project.hazards {
        push_hazard(&mut blocks, project, hazard);
    }
    blocks
}

fn matrix_table() -> Table {
    let mut headers = vec![Cell::new("Likelihood / Severity")];
    headers.extend(Severity::ALL.iter().map(|s| Cell::new(s.label())));

    let mut table = Table::new().column_widths(vec![2400]);
    table.headers = headers;
    for row in risk_matrix() {
        let Some(first) = row.first() else {
            continue;
        };
        let mut cells = vec![Cell::new(first.likelihood.label()).bold()];
        cells.extend(row.iter().map(|cell| {
            Cell::new(cell.score.to_string()).highlight(rating_highlight(cell.rating))
        }));
        table.rows.push(cells);
    }
    table
}

fn risk_cells(risk: &RiskSummary) -> (Cell, Cell) {
    match RiskRating::from_label(&risk.rating) {
        Some(rating) if !risk.is_unassessed() => (
            Cell::new(risk.score.to_string()),
            Cell::new(rating.label()).highlight(rating_highlight(rating)),
        ),
        _ => (Cell::new("-"), Cell::new("Not assessed")),
    }
}

fn summary_table(project: &Project) -> Table {
    let mut table = Table::new()
        .headers(["ID", "Hazard", "Score", "Rating"])
        .column_widths(vec![800, 5200, 900]);
    for hazard in &project.hazards {
        let (score, rating) = risk_cells(&highest_risk(hazard, &project.impacts));
        table.rows.push(vec![
            Cell::new(hazard.id.as_str()),
            Cell::new(hazard.description.as_str()),
            score,
            rating,
        ]);
    }
    table
}

fn push_hazard(blocks: &mut Vec<DocxBlock>, project: &Project, hazard: &Hazard) {
    blocks.push(Paragraph::heading2(format!("Hazard {}: {}", hazard.id, hazard.description)).into());

    let risk = highest_risk(hazard, &project.impacts);
    let line = match RiskRating::from_label(&risk.rating) {
        Some(rating) if !risk.is_unassessed() => Paragraph::new(format!(
            "Highest risk: {} ({})",
            risk.score,
            rating.label()
        ))
        .bold()
        .highlight(rating_highlight(rating)),
        _ => Paragraph::new("Highest risk: not assessed").bold(),
    };
    blocks.push(line.into());

    let causes = project.causes_of(hazard);
    blocks.push(Paragraph::new("Causes").bold().spacing(120, 60).into());
    if causes.is_empty() {
        blocks.push(Paragraph::new("None recorded.").into());
    }
    for cause in causes {
        blocks.push(Paragraph::bullet(cause.description.as_str(), 0).into());
        for mitigation in project.mitigations_of(&cause.mitigation_ids) {
            blocks.push(
                Paragraph::bullet(
                    format!(
                        "Mitigation ({}): {}",
                        mitigation.implementation_class, mitigation.description
                    ),
                    1,
                )
                .into(),
            );
        }
    }

    let mitigations = project.mitigations_of(&hazard.mitigation_ids);
    blocks.push(Paragraph::new("Mitigations").bold().spacing(120, 60).into());
    if mitigations.is_empty() {
        blocks.push(Paragraph::new("None recorded.").into());
    }
    for group in group_by_implementation_class(mitigations) {
        if group.items.is_empty() {
            continue;
        }
        blocks.push(Paragraph::bullet(group.label, 0).underline().into());
        for mitigation in group.items {
            blocks.push(Paragraph::bullet(mitigation.description.as_str(), 1).into());
        }
    }

    blocks.push(Paragraph::new("Impacts").bold().spacing(120, 60).into());
    if hazard.impacts.is_empty() {
        blocks.push(Paragraph::new("None recorded.").into());
        return;
    }
    let mut table = Table::new()
        .headers(["Impact", "Severity", "Likelihood", "Score", "Rating"])
        .column_widths(vec![3400, 1600, 1600, 900]);
    for link in &hazard.impacts {
        let impact = project.impact(&link.impact_id);
        let description = impact.map_or_else(
            || format!("Unknown impact {}", link.impact_id),
            |i| i.description.clone(),
        );
        let severity = impact
            .and_then(|i| i.severity.as_deref())
            .and_then(Severity::from_label)
            .map_or("-", Severity::label);
        let likelihood = link
            .likelihood
            .as_deref()
            .and_then(Likelihood::from_label)
            .map_or("-", Likelihood::label);
        let (score, rating) = match assess_hazard_impact(link, &project.impacts) {
            Some(result) => (
                Cell::new(result.score.to_string()),
                Cell::new(result.rating.label()).highlight(rating_highlight(result.rating)),
            ),
            None => (Cell::new("-"), Cell::new("Not assessed")),
        };
        table.rows.push(vec![
            Cell::new(description),
            Cell::new(severity),
            Cell::new(likelihood),
            score,
            rating,
        ]);
    }
    blocks.push(table.into());
}
