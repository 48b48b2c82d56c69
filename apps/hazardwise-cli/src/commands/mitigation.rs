//! Mitigation commands

use clap::{ArgGroup, Args, Subcommand};
use hazardwise_core::{CauseId, HazardId, MitigationId};
use hazardwise_risk::{MitigationImplementationClass, MitigationTarget};

use hazardwise_cli::error::{CliError, CliResult};
use hazardwise_cli::output::{print_json, print_success};
use hazardwise_cli::AppContext;

/// Arguments for the mitigation command
#[derive(Args, Debug)]
pub struct MitigationArgs {
    #[command(subcommand)]
    pub command: MitigationCommands,
}

/// Where a mitigation is attached
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["hazard", "cause"])))]
pub struct TargetArgs {
    /// Attach to a hazard
    #[arg(long)]
    pub hazard: Option<String>,

    /// Attach to a cause
    #[arg(long)]
    pub cause: Option<String>,
}

impl TargetArgs {
    fn target(self) -> CliResult<MitigationTarget> {
        match (self.hazard, self.cause) {
            (Some(hazard), _) => Ok(MitigationTarget::Hazard(HazardId::new(hazard))),
            (None, Some(cause)) => Ok(MitigationTarget::Cause(CauseId::new(cause))),
            (None, None) => Err(CliError::Validation(
                "One of --hazard or --cause is required".to_string(),
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MitigationCommands {
    /// Record a new mitigation
    Add {
        #[command(flatten)]
        target: TargetArgs,
        /// The control that reduces the risk
        description: String,
        /// Who implements it
        #[arg(long, default_value = "organisation", value_parser = ["organisation", "manufacturer"])]
        class: String,
    },

    /// Attach an existing mitigation to a hazard or cause
    Link {
        #[command(flatten)]
        target: TargetArgs,
        /// Mitigation id
        mitigation: String,
    },

    /// Detach a mitigation from a hazard or cause
    Remove {
        #[command(flatten)]
        target: TargetArgs,
        /// Mitigation id
        mitigation: String,
    },
}

/// Execute the mitigation command
pub async fn execute(args: MitigationArgs, ctx: &AppContext) -> CliResult<()> {
    match args.command {
        MitigationCommands::Add {
            target,
            description,
            class,
        } => {
            let class = MitigationImplementationClass::normalize(&class);
            let mitigation = ctx
                .service
                .add_mitigation(&target.target()?, &description, class)
                .await?;
            if ctx.json() {
                return print_json(&mitigation);
            }
            print_success(&format!(
                "Created mitigation {} ({})",
                mitigation.id,
                class.label()
            ));
        }
        MitigationCommands::Link { target, mitigation } => {
            let id = MitigationId::new(mitigation);
            ctx.service.link_mitigation(&target.target()?, &id).await?;
            print_success(&format!("Linked mitigation {}", id));
        }
        MitigationCommands::Remove { target, mitigation } => {
            let id = MitigationId::new(mitigation);
            match target.target()? {
                MitigationTarget::Hazard(hazard) => {
                    ctx.service.remove_hazard_mitigation(&hazard, &id).await?;
                }
                MitigationTarget::Cause(cause) => {
                    ctx.service.remove_cause_mitigation(&cause, &id).await?;
                }
            }
            print_success(&format!("Detached mitigation {}", id));
        }
    }
    Ok(())
}
