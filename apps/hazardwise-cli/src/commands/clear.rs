//! Clear and prune commands

use clap::Args;

use hazardwise_cli::error::{CliError, CliResult};
use hazardwise_cli::output::{print_json, print_success};
use hazardwise_cli::AppContext;

/// Arguments for the clear command
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm deleting every hazard, cause, impact and mitigation
    #[arg(long)]
    pub yes: bool,
}

/// Execute the clear command
pub async fn execute(args: ClearArgs, ctx: &AppContext) -> CliResult<()> {
    if !args.yes {
        return Err(CliError::Validation(
            "Refusing to clear the hazard log without --yes".to_string(),
        ));
    }
    ctx.service.clear().await?;
    print_success("Hazard log cleared");
    Ok(())
}

/// Execute the prune command
pub async fn execute_prune(ctx: &AppContext) -> CliResult<()> {
    let report = ctx.service.prune_unused().await?;
    if ctx.json() {
        return print_json(&report);
    }
    print_success(&format!(
        "Removed {} causes, {} impacts, {} mitigations",
        report.causes, report.impacts, report.mitigations
    ));
    Ok(())
}
