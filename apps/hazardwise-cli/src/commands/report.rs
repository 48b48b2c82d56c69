//! Report command: export the hazard log as .docx

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use hazardwise_docx::{write_document_with, DocumentOptions};
use serde_json::json;

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_success};
use hazardwise_cli::report::{build_report, report_title};
use hazardwise_cli::AppContext;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Where to write the .docx file
    #[arg(long, short = 'o', default_value = "safety-case.docx")]
    pub output: PathBuf,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,
}

/// Execute the report command
pub async fn execute(args: ReportArgs, ctx: &AppContext) -> CliResult<()> {
    let project = ctx.service.project().await?;
    let title = args
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| report_title(&project, &ctx.config));

    let generated = Utc::now();
    let blocks = build_report(&project, &title, generated);
    let options = DocumentOptions::default()
        .with_author(ctx.config.author.clone())
        .with_created(generated)
        .with_page_margin(ctx.config.page_margin);

    let blob = write_document_with(&args.output, &title, &blocks, &options)?;

    if ctx.json() {
        return print_json(&json!({
            "path": args.output.display().to_string(),
            "bytes": blob.len(),
            "mime_type": blob.mime_type,
        }));
    }
    print_success(&format!(
        "Wrote {} ({} bytes)",
        args.output.display(),
        blob.len()
    ));
    Ok(())
}
