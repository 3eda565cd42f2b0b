use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tryg-cli", version, about = "Tryg CLI")]
struct Cli {
    /// Config file to use instead of ~/.config/tryg/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show help exchange matches for a circle snapshot
    Matches(commands::matches::MatchesArgs),
    /// Show the daily briefing for a circle snapshot
    Briefing(commands::briefing::BriefingArgs),
    /// Show the medication streak for a circle snapshot
    Streak(commands::streak::StreakArgs),
    /// Match rule inspection
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Matches(args) => commands::matches::run(args, config_path),
        Commands::Briefing(args) => commands::briefing::run(args, config_path),
        Commands::Streak(args) => commands::streak::run(args, config_path),
        Commands::Rules { action } => commands::rules::run(action, config_path),
        Commands::Config { action } => commands::config::run(action, config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
