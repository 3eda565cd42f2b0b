pub mod briefing;
pub mod config;
pub mod matches;
pub mod rules;
pub mod streak;

use std::path::{Path, PathBuf};

use tryg_core::Config;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the config file: `--config` if given, else the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::default_path()?),
    }
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = config_path(explicit)?;
    tracing::debug!(path = %path.display(), "loading config");
    Ok(Config::load_from(&path)?)
}
