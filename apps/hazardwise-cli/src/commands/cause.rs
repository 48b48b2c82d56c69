//! Cause commands

use clap::{Args, Subcommand};
use hazardwise_core::{CauseId, HazardId};

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_success};
use hazardwise_cli::AppContext;

/// Arguments for the cause command
#[derive(Args, Debug)]
pub struct CauseArgs {
    #[command(subcommand)]
    pub command: CauseCommands,
}

#[derive(Subcommand, Debug)]
pub enum CauseCommands {
    /// Record a new cause of a hazard
    Add {
        /// Hazard id
        hazard: String,
        /// What could lead to the hazard
        description: String,
    },

    /// Link an existing cause to another hazard
    Link {
        /// Hazard id
        hazard: String,
        /// Cause id
        cause: String,
    },

    /// Unlink a cause from a hazard
    Remove {
        /// Hazard id
        hazard: String,
        /// Cause id
        cause: String,
    },
}

/// Execute the cause command
pub async fn execute(args: CauseArgs, ctx: &AppContext) -> CliResult<()> {
    match args.command {
        CauseCommands::Add {
            hazard,
            description,
        } => {
            let cause = ctx
                .service
                .add_cause(&HazardId::new(hazard), &description)
                .await?;
            if ctx.json() {
                return print_json(&cause);
            }
            print_success(&format!("Created cause {}", cause.id));
        }
        CauseCommands::Link { hazard, cause } => {
            let hazard = ctx
                .service
                .link_cause(&HazardId::new(hazard), &CauseId::new(cause))
                .await?;
            print_success(&format!(
                "Hazard {} now has {} causes",
                hazard.id,
                hazard.cause_ids.len()
            ));
        }
        CauseCommands::Remove { hazard, cause } => {
            let hazard = ctx
                .service
                .remove_cause(&HazardId::new(hazard), &CauseId::new(cause))
                .await?;
            print_success(&format!("Unlinked cause from hazard {}", hazard.id));
        }
    }
    Ok(())
}
