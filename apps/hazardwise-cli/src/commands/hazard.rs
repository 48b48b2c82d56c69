//! Hazard commands: add, list, edit, remove

use clap::{Args, Subcommand};
use hazardwise_core::HazardId;
use hazardwise_risk::highest_risk;
use serde::Serialize;

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_success, truncate};
use hazardwise_cli::AppContext;

/// Arguments for the hazard command
#[derive(Args, Debug)]
pub struct HazardArgs {
    #[command(subcommand)]
    pub command: HazardCommands,
}

#[derive(Subcommand, Debug)]
pub enum HazardCommands {
    /// Record a new hazard
    Add {
        /// What could go wrong
        description: String,
    },

    /// List hazards with their highest risk
    List,

    /// Change a hazard's description
    Edit {
        /// Hazard id
        id: String,
        /// New description
        description: String,
    },

    /// Delete a hazard and anything only it used
    Remove {
        /// Hazard id
        id: String,
    },
}

#[derive(Serialize)]
struct HazardRow<'a> {
    id: &'a str,
    description: &'a str,
    causes: usize,
    impacts: usize,
    mitigations: usize,
    score: u8,
    rating: String,
}

/// Execute the hazard command
pub async fn execute(args: HazardArgs, ctx: &AppContext) -> CliResult<()> {
    match args.command {
        HazardCommands::Add { description } => {
            let hazard = ctx.service.create_hazard(&description).await?;
            print_success(&format!("Created hazard {}", hazard.id));
            Ok(())
        }
        HazardCommands::List => list(ctx).await,
        HazardCommands::Edit { id, description } => {
            let hazard = ctx
                .service
                .update_hazard(&HazardId::new(id), &description)
                .await?;
            print_success(&format!("Updated hazard {}", hazard.id));
            Ok(())
        }
        HazardCommands::Remove { id } => {
            let id = HazardId::new(id);
            let report = ctx.service.delete_hazard(&id).await?;
            print_success(&format!(
                "Deleted hazard {} (removed {} unused records)",
                id,
                report.total()
            ));
            Ok(())
        }
    }
}

async fn list(ctx: &AppContext) -> CliResult<()> {
    let project = ctx.service.project().await?;
    let rows: Vec<HazardRow<'_>> = project
        .hazards
        .iter()
        .map(|hazard| {
            let risk = highest_risk(hazard, &project.impacts);
            HazardRow {
                id: hazard.id.as_str(),
                description: &hazard.description,
                causes: hazard.cause_ids.len(),
                impacts: hazard.impacts.len(),
                mitigations: hazard.mitigation_ids.len(),
                score: risk.score,
                rating: risk.rating,
            }
        })
        .collect();

    if ctx.json() {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No hazards recorded.");
        return Ok(());
    }

    println!(
        "{:<6} {:<40} {:>6} {:>7} {:>11}  {}",
        "ID", "DESCRIPTION", "CAUSES", "IMPACTS", "MITIGATIONS", "RISK"
    );
    for row in &rows {
        let risk = if row.score == 0 {
            "-".to_string()
        } else {
            format!("{} {}", row.score, row.rating)
        };
        println!(
            "{:<6} {:<40} {:>6} {:>7} {:>11}  {}",
            row.id,
            truncate(row.description, 40),
            row.causes,
            row.impacts,
            row.mitigations,
            risk
        );
    }
    Ok(())
}
