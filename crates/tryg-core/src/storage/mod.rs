mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/tryg[-dev]/` based on TRYG_ENV.
///
/// Set TRYG_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TRYG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tryg-dev")
    } else {
        base_dir.join("tryg")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
