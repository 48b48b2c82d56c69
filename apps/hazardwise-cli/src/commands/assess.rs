//! Risk assessment commands: assess, assess-label, matrix

use clap::Args;
use hazardwise_risk::{assess_by_label, assess_numeric, risk_matrix, RiskResult, Severity};

use hazardwise_cli::error::CliResult;
use hazardwise_cli::output::{print_json, print_key_value, print_warning, OutputFormat};

/// Arguments for the assess command
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Likelihood level, 1 (rare) to 5 (almost certain)
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    pub likelihood: f64,

    /// Severity level, 1 (minor) to 5 (catastrophic)
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub severity: f64,
}

/// Arguments for the assess-label command
#[derive(Args, Debug)]
pub struct AssessLabelArgs {
    /// Severity label, e.g. "Major" or "Negligible"
    #[arg(long, short = 's')]
    pub severity: Option<String>,

    /// Likelihood label, e.g. "Almost Certain" or "Low"
    #[arg(long, short = 'l')]
    pub likelihood: Option<String>,
}

fn print_result(result: &RiskResult, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Text => {
            print_key_value("Score", &result.score.to_string());
            print_key_value("Rating", result.rating.label());
            print_key_value("Definition", result.definition);
            Ok(())
        }
    }
}

/// Execute the assess command
pub fn execute(args: AssessArgs, format: OutputFormat) -> CliResult<()> {
    let result = assess_numeric(args.likelihood, args.severity)?;
    print_result(&result, format)
}

/// Execute the assess-label command
///
/// Unknown or missing labels are not an error: there is simply no result.
pub fn execute_label(args: AssessLabelArgs, format: OutputFormat) -> CliResult<()> {
    match assess_by_label(args.severity.as_deref(), args.likelihood.as_deref()) {
        Some(result) => print_result(&result, format),
        None => match format {
            OutputFormat::Json => print_json(&serde_json::Value::Null),
            OutputFormat::Text => {
                print_warning("No result: severity and likelihood must both be known labels");
                Ok(())
            }
        },
    }
}

/// Execute the matrix command
pub fn execute_matrix(format: OutputFormat) -> CliResult<()> {
    let rows = risk_matrix();
    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    print!("{:<16}", "");
    for severity in Severity::ALL {
        print!("{:>14}", severity.label());
    }
    println!();
    for row in &rows {
        if let Some(first) = row.first() {
            print!("{:<16}", first.likelihood.label());
        }
        for cell in row {
            print!("{:>14}", cell.score);
        }
        println!();
    }
    Ok(())
}
