//! Impact commands

use clap::{Args, Subcommand};
use hazardwise_core::{HazardId, ImpactId};
use hazardwise_risk::NewImpactInput;

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_success};
use hazardwise_cli::AppContext;

/// Arguments for the impact command
#[derive(Args, Debug)]
pub struct ImpactArgs {
    #[command(subcommand)]
    pub command: ImpactCommands,
}

#[derive(Subcommand, Debug)]
pub enum ImpactCommands {
    /// Record a new impact of a hazard
    Add {
        /// Hazard id
        hazard: String,
        /// The harm to the patient
        description: String,
        /// Severity label, e.g. "Major"
        #[arg(long)]
        severity: Option<String>,
        /// Likelihood of this impact for the hazard, e.g. "Possible"
        #[arg(long)]
        likelihood: Option<String>,
    },

    /// Link an existing impact to a hazard, or change the link's likelihood
    Link {
        /// Hazard id
        hazard: String,
        /// Impact id
        impact: String,
        /// Likelihood of this impact for the hazard
        #[arg(long)]
        likelihood: Option<String>,
    },

    /// Change the severity of an impact
    SetSeverity {
        /// Impact id
        impact: String,
        /// Severity label; omit to clear it
        severity: Option<String>,
    },

    /// Unlink an impact from a hazard
    Remove {
        /// Hazard id
        hazard: String,
        /// Impact id
        impact: String,
    },
}

/// Execute the impact command
pub async fn execute(args: ImpactArgs, ctx: &AppContext) -> CliResult<()> {
    match args.command {
        ImpactCommands::Add {
            hazard,
            description,
            severity,
            likelihood,
        } => {
            let input = NewImpactInput {
                description,
                severity,
                likelihood,
            };
            let impact = ctx.service.add_impact(&HazardId::new(hazard), input).await?;
            if ctx.json() {
                return print_json(&impact);
            }
            print_success(&format!("Created impact {}", impact.id));
        }
        ImpactCommands::Link {
            hazard,
            impact,
            likelihood,
        } => {
            let hazard = ctx
                .service
                .link_impact(
                    &HazardId::new(hazard),
                    &ImpactId::new(impact),
                    likelihood.as_deref(),
                )
                .await?;
            print_success(&format!("Linked impact to hazard {}", hazard.id));
        }
        ImpactCommands::SetSeverity { impact, severity } => {
            let impact = ctx
                .service
                .set_impact_severity(&ImpactId::new(impact), severity.as_deref())
                .await?;
            print_success(&format!(
                "Impact {} severity: {}",
                impact.id,
                impact.severity.as_deref().unwrap_or("unset")
            ));
        }
        ImpactCommands::Remove { hazard, impact } => {
            let hazard = ctx
                .service
                .remove_impact(&HazardId::new(hazard), &ImpactId::new(impact))
                .await?;
            print_success(&format!("Unlinked impact from hazard {}", hazard.id));
        }
    }
    Ok(())
}
