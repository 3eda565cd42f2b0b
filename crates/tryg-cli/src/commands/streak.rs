use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use tryg_core::{streak_message, CircleSnapshot, Locale};

use super::{load_config, CliResult};

#[derive(Args)]
pub struct StreakArgs {
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

pub fn run(args: StreakArgs, config: Option<&Path>) -> CliResult {
    let config = load_config(config)?;
    let snapshot = CircleSnapshot::load(&args.snapshot)?;
    let generator = config.briefing_generator();
    let locale = args.locale.unwrap_or(generator.locale());

    let days = snapshot.medication_streak(generator.classifier(), &Local::now());
    let message = streak_message(days, locale);

    if args.json {
        let json = serde_json::json!({ "days": days, "message": message });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("Streak: {days} day(s)");
    if let Some(message) = message {
        println!("{message}");
    }
    Ok(())
}
