//! Summary command: highest risk per hazard

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, truncate};
use hazardwise_cli::AppContext;

/// Execute the summary command
pub async fn execute(ctx: &AppContext) -> CliResult<()> {
    let rows = ctx.service.summary().await?;
    if ctx.json() {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No hazards recorded.");
        return Ok(());
    }

    println!("{:<6} {:<40} {:>5}  {}", "ID", "HAZARD", "SCORE", "RATING");
    for row in &rows {
        let (score, rating) = if row.risk.is_unassessed() {
            ("-".to_string(), "Not assessed")
        } else {
            (row.risk.score.to_string(), row.risk.rating.as_str())
        };
        println!(
            "{:<6} {:<40} {:>5}  {}",
            row.hazard_id.as_str(),
            truncate(&row.description, 40),
            score,
            rating
        );
    }
    Ok(())
}
