//! hazardwise CLI - Clinical hazard log and safety case exporter
//!
//! This CLI enables safety officers to:
//! - Assess risk with the 5x5 clinical risk matrix
//! - Record hazards, causes, impacts and mitigations
//! - Summarise the highest risk per hazard
//! - Export the hazard log as a .docx safety case report

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use hazardwise_cli::error::CliResult;
use hazardwise_cli::logging::init_logging;
use hazardwise_cli::output::OutputFormat;
use hazardwise_cli::AppContext;

mod commands;

/// hazardwise CLI - Clinical risk management
#[derive(Parser)]
#[command(name = "hazardwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Project file to use instead of the one in the config directory
    #[arg(long, global = true, value_name = "FILE")]
    project: Option<PathBuf>,

    /// Output format for commands that print data
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a likelihood/severity pair given as levels 1-5
    Assess(commands::assess::AssessArgs),

    /// Assess a likelihood/severity pair given as labels
    AssessLabel(commands::assess::AssessLabelArgs),

    /// Print the 5x5 risk matrix
    Matrix,

    /// Show or edit the project header
    Project(commands::project::ProjectArgs),

    /// Manage hazards
    Hazard(commands::hazard::HazardArgs),

    /// Manage causes of a hazard
    Cause(commands::cause::CauseArgs),

    /// Manage impacts of a hazard
    Impact(commands::impact::ImpactArgs),

    /// Manage mitigations of a hazard or cause
    Mitigation(commands::mitigation::MitigationArgs),

    /// Show the highest risk of every hazard
    Summary,

    /// Remove causes, impacts and mitigations no hazard uses
    Prune,

    /// Export the hazard log as a .docx report
    Report(commands::report::ReportArgs),

    /// Delete the stored project
    Clear(commands::clear::ClearArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let format = cli.format;
    let project = cli.project;
    let context = || AppContext::load(project.as_deref(), format);

    match cli.command {
        Commands::Assess(args) => commands::assess::execute(args, format),
        Commands::AssessLabel(args) => commands::assess::execute_label(args, format),
        Commands::Matrix => commands::assess::execute_matrix(format),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Project(args) => commands::project::execute(args, &context()?).await,
        Commands::Hazard(args) => commands::hazard::execute(args, &context()?).await,
        Commands::Cause(args) => commands::cause::execute(args, &context()?).await,
        Commands::Impact(args) => commands::impact::execute(args, &context()?).await,
        Commands::Mitigation(args) => commands::mitigation::execute(args, &context()?).await,
        Commands::Summary => commands::summary::execute(&context()?).await,
        Commands::Prune => commands::clear::execute_prune(&context()?).await,
        Commands::Report(args) => commands::report::execute(args, &context()?).await,
        Commands::Clear(args) => commands::clear::execute(args, &context()?).await,
    }
}
