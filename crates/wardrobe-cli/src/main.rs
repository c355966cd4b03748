//! Wardrobe CLI - garment tracking and cost-per-wear analytics
//!
//! This is the command-line interface for Wardrobe. It drives the
//! `wardrobe-core` engine against a JSON snapshot file.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use wardrobe_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, GarmentsSubcommand, OutfitsSubcommand};
use crate::commands::{check, garments, init, insights, misc, outfits, stats};
use crate::errors::exit_code_for;
use crate::logging::init_logging;
use crate::ui::render::print_error;
use crate::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::fallback(cli.no_color, cli.ascii);

        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        let message = match error_msg.find("\nHint:") {
            Some(idx) => error_msg[..idx].to_string(),
            None => error_msg.clone(),
        };

        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Extract a hint from an error message if it contains "Hint:",
/// or provide contextual hints for common error types.
fn extract_error_hint(error: &str) -> Option<String> {
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + "\nHint:".len()..].trim().to_string());
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("unknown category") {
        return Some(
            "Categories are tops, bottoms, dresses, outerwear, shoes, accessories, or a garment type such as jeans."
                .to_string(),
        );
    }

    if error_lower.contains("unknown occasion") || error_lower.contains("unknown season") {
        return Some("Use snake_case tokens, e.g. formal_event or all_year.".to_string());
    }

    if error_lower.contains("is ambiguous") {
        return Some("Type more characters of the ID.".to_string());
    }

    if error_lower.contains("not a wardrobe snapshot") {
        return Some(
            "The snapshot must be a JSON object with \"garments\" and \"outfits\" arrays."
                .to_string(),
        );
    }

    if error_lower.contains("integrity check failed") {
        return Some("Run `wardrobe check` for the full list of problems.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            stats::handle_stats(ctx, args)?;
        }
        Some(Commands::Garments(sub)) => match sub {
            GarmentsSubcommand::Add(args) => garments::handle_add(ctx, args)?,
            GarmentsSubcommand::List(args) => garments::handle_list(ctx, args)?,
            GarmentsSubcommand::Show(args) => garments::handle_show(ctx, args)?,
            GarmentsSubcommand::Wear(args) => garments::handle_wear(ctx, args)?,
            GarmentsSubcommand::Archive(args) => garments::handle_archive(ctx, args)?,
        },
        Some(Commands::Outfits(sub)) => match sub {
            OutfitsSubcommand::Create(args) => outfits::handle_create(ctx, args)?,
            OutfitsSubcommand::List(args) => outfits::handle_list(ctx, args)?,
            OutfitsSubcommand::Show(args) => outfits::handle_show(ctx, args)?,
            OutfitsSubcommand::Wear(args) => outfits::handle_wear(ctx, args)?,
        },
        Some(Commands::Forgotten(args)) => {
            insights::handle_forgotten(ctx, args)?;
        }
        Some(Commands::Context) => {
            insights::handle_context(ctx)?;
        }
        Some(Commands::Check(args)) => {
            check::handle_check(ctx, args)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            println!("Wardrobe v{}", VERSION);
            println!("\nQuickstart:");
            println!("  wardrobe init");
            println!("  wardrobe garments add \"Oxford shirt\" --category shirt --color blue --price 40");
            println!("  wardrobe stats");
            println!("  wardrobe garments list");
            println!("  wardrobe outfits wear <id>");
            println!("\nRun `wardrobe --help` for full usage.");
        }
    }

    Ok(())
}
