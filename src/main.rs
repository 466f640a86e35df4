use std::process::ExitCode;

use clap::Parser;
use user_model::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => cli::validate::run(args).await,
        Command::Rules(args) => cli::rules::run(args).map(|()| ExitCode::SUCCESS),
    }
}
