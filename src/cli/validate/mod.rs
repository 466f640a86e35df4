//! Validate command - checks user records loaded from a JSON file

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::ValidationSettings;
use crate::infrastructure::user::{parse_users, UserValidationService, ValidationReport};

/// Arguments for the validate command
#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// JSON file holding a user object or an array of user objects
    pub file: PathBuf,

    /// Accepted user type (repeatable, adds to configured types)
    #[arg(long = "allowed-type", value_name = "TYPE")]
    pub allowed_types: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the validate command; exits with failure if any record is invalid
pub async fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();

    let mut settings = config.validation;
    settings.allowed_types.extend(args.allowed_types.iter().cloned());

    let input = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    info!("Validating users from {}", args.file.display());

    let report = validate_input(&input, &settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn validate_input(input: &str, settings: &ValidationSettings) -> anyhow::Result<ValidationReport> {
    let users = parse_users(input)?;
    Ok(UserValidationService::from_settings(settings).validate_batch(&users))
}

/// Render a report as plain text, one block per record
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    for record in &report.records {
        let id = record
            .user_id
            .map_or_else(|| "null".to_string(), |id| id.to_string());
        let status = if record.is_valid() { "valid" } else { "invalid" };

        out.push_str(&format!("record {} (userId {}): {}\n", record.index, id, status));

        for error in &record.errors {
            out.push_str(&format!("  {}: {}\n", error.field, error.message));
        }
    }

    out.push_str(&format!(
        "{} valid, {} invalid\n",
        report.valid, report.invalid
    ));

    out
}
