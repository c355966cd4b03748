//! Application context for the Wardrobe CLI.
//!
//! Bundles the parsed CLI arguments with a lazily loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::{debug, warn};

use wardrobe_core::store::JsonFileStore;
use wardrobe_core::WardrobeError;

use crate::cli::Cli;
use crate::config::{read_config, WardrobeConfig};
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_FORGOTTEN_LIMIT};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{missing_snapshot_message, resolve_config_path, resolve_snapshot_path};

/// Application context shared by every command handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<WardrobeConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. `None` when no file exists.
    pub fn config(&self) -> anyhow::Result<Option<&WardrobeConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            debug!(path = %path.display(), "loading config");
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Currency prefix for money amounts.
    pub fn currency(&self) -> String {
        match self.config() {
            Ok(Some(config)) => config.display.currency.clone(),
            Ok(None) => DEFAULT_CURRENCY.to_string(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config file, using default currency");
                DEFAULT_CURRENCY.to_string()
            }
        }
    }

    /// Default number of forgotten items to show.
    pub fn forgotten_limit(&self) -> usize {
        match self.config() {
            Ok(Some(config)) => config.display.forgotten_limit,
            Ok(None) => DEFAULT_FORGOTTEN_LIMIT,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config file, using default forgotten limit");
                DEFAULT_FORGOTTEN_LIMIT
            }
        }
    }

    /// Resolve where the snapshot lives.
    pub fn snapshot_path(&self) -> anyhow::Result<PathBuf> {
        if self.cli.snapshot.is_some() {
            let config_path = resolve_config_path().unwrap_or_default();
            return resolve_snapshot_path(self.cli, None, &config_path);
        }
        let config_path = resolve_config_path()?;
        resolve_snapshot_path(self.cli, self.config()?, &config_path)
    }

    /// Open the snapshot store.
    ///
    /// A missing snapshot becomes a `CliError::NotFound` carrying an init hint.
    pub fn open_store(&self) -> anyhow::Result<JsonFileStore> {
        let path = self.snapshot_path()?;
        match JsonFileStore::open(&path) {
            Ok(store) => {
                debug!(
                    path = %path.display(),
                    garments = store.garments().len(),
                    outfits = store.outfits().len(),
                    rejected = store.rejected().len(),
                    "opened snapshot"
                );
                Ok(store)
            }
            Err(WardrobeError::NotFound(_)) => Err(CliError::not_found(
                missing_snapshot_message(&path),
                "Hint: Run `wardrobe init` to create an empty snapshot.",
            )
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    /// UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        Ok(UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
        )?)
    }

    /// UI context for commands without output flags.
    pub fn default_ui(&self) -> UiContext {
        UiContext::fallback(self.cli.no_color, self.cli.ascii)
    }
}
