use std::path::Path;

use clap::Subcommand;
use tryg_core::catalog;

use super::{load_config, CliResult};

#[derive(Subcommand)]
pub enum RulesAction {
    /// List configured match rules
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RulesAction, config: Option<&Path>) -> CliResult {
    let config = load_config(config)?;
    let rules = &config.help_exchange;

    match action {
        RulesAction::List { json: true } => {
            println!("{}", serde_json::to_string_pretty(rules)?);
        }
        RulesAction::List { json: false } => {
            println!("Offer -> request:");
            for pair in &rules.match_pairs {
                println!(
                    "  {} {} -> {} ({})",
                    pair.celebration.emoji,
                    label(&pair.offer_id),
                    label(&pair.request_id),
                    pair.celebration.action
                );
            }
            println!("Status -> request:");
            for rule in &rules.status_matches {
                let status = tryg_core::presence::status_option(&rule.status_id)
                    .map_or(rule.status_id.as_str(), |s| s.label);
                println!(
                    "  {} {} -> {} ({})",
                    rule.celebration.emoji,
                    status,
                    label(&rule.request_id),
                    rule.celebration.action
                );
            }
        }
    }
    Ok(())
}

fn label(id: &str) -> String {
    match catalog::help_item(id) {
        Some(item) => format!("{} [{id}]", item.label),
        None => id.to_string(),
    }
}
