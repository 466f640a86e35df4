//! CLI module for the user model
//!
//! Provides subcommands over the user validation contract:
//! - `validate`: validate user records from a JSON file
//! - `rules`: print the constraint table

pub mod rules;
pub mod validate;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// User Model - validate user registration records
#[derive(Parser)]
#[command(name = "user-model")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate user records from a JSON file
    Validate(validate::ValidateArgs),

    /// Print the constraint table
    Rules(rules::RulesArgs),
}

/// Load `.env` and configuration, then install logging
///
/// A configuration that fails to load falls back to defaults with a warning.
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load().map_err(DomainError::from) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!("{}; using defaults", e);
    }

    config
}
