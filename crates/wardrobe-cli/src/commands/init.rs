use std::path::PathBuf;

use tracing::info;

use wardrobe_core::store::JsonFileStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_snapshot_path, write_config, WardrobeConfig};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, hint, print, Badge, OutputMode};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.default_ui();

    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ));
    }

    let snapshot_path = match args.path.clone().or_else(|| ctx.cli().snapshot.clone()) {
        Some(value) => PathBuf::from(value),
        None => default_snapshot_path()?,
    };

    if let Some(parent) = snapshot_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create snapshot directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }

    let created = if snapshot_path.exists() {
        // Make sure an existing file is actually a snapshot before pointing at it.
        let store = JsonFileStore::open(&snapshot_path)?;
        info!(
            path = %snapshot_path.display(),
            garments = store.garments().len(),
            "using existing snapshot"
        );
        false
    } else {
        JsonFileStore::create(&snapshot_path)?;
        true
    };

    write_config(&config_path, &WardrobeConfig::new(snapshot_path.clone()))?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                let title = styled("Wardrobe", styles::bold(), ui_ctx.color);
                println!("{} \u{00B7} init\n", title);
                let snapshot_line = if created {
                    format!("Snapshot created at {}", snapshot_path.display())
                } else {
                    format!("Using existing snapshot at {}", snapshot_path.display())
                };
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &snapshot_line));
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Config written to {}", config_path.display()),
                    ),
                );
                println!();
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        "wardrobe stats  \u{00B7}  wardrobe garments list  \u{00B7}  wardrobe --help",
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("snapshot_path={}", snapshot_path.display());
                println!("snapshot_created={}", created);
                println!("config_path={}", config_path.display());
            }
        }
    }

    Ok(())
}
