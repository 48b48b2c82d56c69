//! Project header commands

use clap::{Args, Subcommand};

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_key_value, print_success};
use hazardwise_cli::AppContext;

/// Arguments for the project command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Show the project header and record counts
    Show,

    /// Set project header fields
    Set {
        /// Project title, also the report title
        #[arg(long)]
        title: Option<String>,

        /// Free text describing the system under assessment
        #[arg(long)]
        description: Option<String>,

        /// Name of the clinical safety officer
        #[arg(long)]
        safety_officer: Option<String>,
    },
}

/// Execute the project command
pub async fn execute(args: ProjectArgs, ctx: &AppContext) -> CliResult<()> {
    match args.command {
        ProjectCommands::Show => {
            let project = ctx.service.project().await?;
            if ctx.json() {
                return print_json(&project);
            }
            print_key_value("Title", &project.title);
            print_key_value("Description", &project.description);
            print_key_value("Safety officer", &project.safety_officer);
            print_key_value("Hazards", &project.hazards.len().to_string());
            print_key_value("Causes", &project.causes.len().to_string());
            print_key_value("Impacts", &project.impacts.len().to_string());
            print_key_value("Mitigations", &project.mitigations.len().to_string());
            print_key_value("Stored at", &ctx.paths.project_file.display().to_string());
            Ok(())
        }
        ProjectCommands::Set {
            title,
            description,
            safety_officer,
        } => {
            ctx.service
                .update_details(title, description, safety_officer)
                .await?;
            print_success("Project updated");
            Ok(())
        }
    }
}
