//! Path resolution for config and snapshot files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, WardrobeConfig};
use crate::errors::CliError;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "WARDROBE_CONFIG";

/// Resolve the config file path, checking WARDROBE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the snapshot path from CLI args, then the config file.
pub fn resolve_snapshot_path(
    cli: &Cli,
    config: Option<&WardrobeConfig>,
    config_path: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.snapshot.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    match config {
        Some(config) => Ok(PathBuf::from(&config.wardrobe.snapshot)),
        None => Err(CliError::not_found(
            missing_config_message(config_path),
            "Hint: Run `wardrobe init` or pass --snapshot <PATH>.",
        )
        .into()),
    }
}

/// Error message when the snapshot file is missing.
pub fn missing_snapshot_message(path: &Path) -> String {
    format!("No wardrobe snapshot found at {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No wardrobe config found at {}", config_path.display())
}
