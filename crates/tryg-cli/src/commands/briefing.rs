//! Daily briefing for a snapshot.

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use serde::Serialize;
use tryg_core::{streak_message, Briefing, CircleSnapshot, Locale};

use super::{load_config, CliResult};

#[derive(Args)]
pub struct BriefingArgs {
    /// Circle snapshot (JSON)
    #[arg(long)]
    snapshot: PathBuf,
    /// Language (da or en); defaults to the configured one
    #[arg(long)]
    locale: Option<Locale>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BriefingOutput {
    #[serde(flatten)]
    briefing: Briefing,
    streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    streak_message: Option<String>,
}

pub fn run(args: BriefingArgs, config: Option<&Path>) -> CliResult {
    let config = load_config(config)?;
    let snapshot = CircleSnapshot::load(&args.snapshot)?;

    let mut generator = config.briefing_generator();
    if let Some(locale) = args.locale {
        generator = generator.with_locale(locale);
    }

    let now = Local::now();
    let briefing = generator.generate_at(&snapshot.briefing_input(), &now);
    let streak_days = snapshot.medication_streak(generator.classifier(), &now);
    let output = BriefingOutput {
        briefing,
        streak_days,
        streak_message: streak_message(streak_days, generator.locale()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", output.briefing.emoji, output.briefing.message);
    if let Some(line) = output.streak_message {
        println!("{line}");
    }
    Ok(())
}
