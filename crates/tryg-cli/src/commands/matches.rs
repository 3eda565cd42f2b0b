//! Help exchange matches for a snapshot.

use std::path::{Path, PathBuf};

use clap::Args;
use tryg_core::{compute_matches, ActiveMatch, CircleSnapshot, MatchKind};

use super::{load_config, CliResult};

#[derive(Args)]
pub struct MatchesArgs {
    /// Circle snapshot (JSON)
    #[arg(long)]
    snapshot: PathBuf,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: MatchesArgs, config: Option<&Path>) -> CliResult {
    let config = load_config(config)?;
    let snapshot = CircleSnapshot::load(&args.snapshot)?;
    let result = compute_matches(&snapshot.match_input(), &config.help_exchange);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if !result.has_matches {
        println!("No matches.");
        return Ok(());
    }

    for m in &result.matches {
        println!("{}", describe(m));
    }
    Ok(())
}

fn describe(m: &ActiveMatch) -> String {
    let c = &m.celebration;
    let pairing = match (m.kind, &m.offer) {
        (MatchKind::OfferRequest, Some(offer)) => format!("{} -> {}", offer.id, m.request.id),
        _ => format!("status -> {}", m.request.id),
    };
    let marker = if m.is_cross_family { " [cross-family]" } else { "" };
    format!("{} {} ({pairing}){marker}\n   {} | {}", c.emoji, c.title, c.message, c.cta)
}
