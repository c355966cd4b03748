use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_FORGOTTEN_LIMIT};

#[derive(Debug, Serialize, Deserialize)]
pub struct WardrobeConfig {
    pub wardrobe: WardrobeSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WardrobeSection {
    /// Path to the JSON snapshot
    pub snapshot: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_forgotten_limit")]
    pub forgotten_limit: usize,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_forgotten_limit() -> usize {
    DEFAULT_FORGOTTEN_LIMIT
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            forgotten_limit: default_forgotten_limit(),
        }
    }
}

impl WardrobeConfig {
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self {
            wardrobe: WardrobeSection {
                snapshot: snapshot_path.to_string_lossy().to_string(),
            },
            display: DisplaySection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_snapshot_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("wardrobe.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<WardrobeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &WardrobeConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wardrobe"));
        }
    }
    Ok(home_dir()?.join(".config").join("wardrobe"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wardrobe"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("wardrobe"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
