//! Rules command - prints the user constraint table

use clap::Args;

use crate::domain::user::{rules, RuleDescription};

/// Arguments for the rules command
#[derive(Args, Clone)]
pub struct RulesArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the rules command
pub fn run(args: RulesArgs) -> anyhow::Result<()> {
    super::bootstrap();

    let descriptions: Vec<RuleDescription> = rules().iter().map(RuleDescription::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptions)?);
    } else {
        print!("{}", render_rules(&descriptions));
    }

    Ok(())
}

fn render_rules(descriptions: &[RuleDescription]) -> String {
    descriptions
        .iter()
        .map(|d| format!("{:<14} {:<28} {}\n", d.field.as_str(), d.constraint, d.message))
        .collect()
}
