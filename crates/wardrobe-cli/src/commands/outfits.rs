use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use wardrobe_core::analytics::{summarize_outfit, summarize_outfits};
use wardrobe_core::model::{Occasion, Outfit, Season};
use wardrobe_core::store::OutfitFilter;
use wardrobe_core::WardrobeStore;

use crate::app::AppContext;
use crate::cli::{OutfitCreateArgs, OutfitListArgs, ShowArgs, WearArgs};
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::errors::CliError;
use crate::helpers::{parse_token, parse_tokens, parse_wear_date, require_garment, require_outfit};
use crate::output::{outfit_json, outfit_row, print_outfit};
use crate::ui::{
    blank_line, format_date, format_money, format_optional_money, header_with_context, hint,
    print, receipt, simple_table, Column, OutputMode,
};

pub fn handle_create(ctx: &AppContext, args: &OutfitCreateArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input("Outfit name must not be empty").into());
    }
    if args.items.is_empty() {
        return Err(CliError::invalid_input("An outfit needs at least one garment").into());
    }

    let mut items = Vec::with_capacity(args.items.len());
    for input in &args.items {
        let garment = require_garment(&store, input)?;
        if garment.is_archived() {
            return Err(CliError::invalid_input(format!(
                "{} is archived and cannot be added to an outfit",
                garment.name
            ))
            .into());
        }
        items.push(garment.id);
    }

    let occasions: Vec<Occasion> = parse_tokens(&args.occasions)?;
    let seasons: Vec<Season> = parse_tokens(&args.seasons)?;
    let outfit = Outfit::new(name, items)
        .with_occasions(occasions)
        .with_seasons(seasons)
        .with_favorite(args.favorite);

    let id = store.upsert_outfit(outfit.clone())?;
    store.save()?;
    info!(outfit = %id, items = outfit.items.len(), "created outfit");

    let summary = summarize_outfit(&outfit, store.garments())?;
    if args.json {
        let output = serde_json::to_string_pretty(&outfit_json(&outfit, &summary))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let currency = ctx.currency();
        let id = id.to_string();
        let count = outfit.items.len().to_string();
        let total = format_money(summary.total_cost, &currency);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Created {}", outfit.name),
                &[
                    ("Id", id.as_str()),
                    ("Items", count.as_str()),
                    ("Total Cost", total.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutfitListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;

    let mut filter = OutfitFilter::new();
    if let Some(occasion) = parse_token::<Occasion>(args.occasion.as_deref())? {
        filter = filter.occasion(occasion);
    }
    if let Some(season) = parse_token::<Season>(args.season.as_deref())? {
        filter = filter.season(season);
    }
    if args.favorite {
        filter = filter.favorite(true);
    }
    filter = filter.limit(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    let outfits = store.list_outfits(&filter)?;
    let report = summarize_outfits(&outfits, store.garments())?;
    let summaries: HashMap<Uuid, _> = report.outfits.iter().map(|s| (s.id, s)).collect();

    if ui_ctx.mode.is_json() {
        let values: Vec<serde_json::Value> = outfits
            .iter()
            .filter_map(|o| summaries.get(&o.id).map(|s| outfit_json(o, s)))
            .collect();
        let output = serde_json::json!({
            "outfits": values,
            "total_outfits": report.total_outfits,
            "total_wears": report.total_wears,
            "favorites": report.favorites,
            "most_worn": report.most_worn,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let currency = ctx.currency();
    let filter_context = build_filter_context(args);

    if outfits.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(
                        &ui_ctx,
                        &header_with_context(&ui_ctx, "outfits", filter_context.as_deref(), None),
                    );
                    blank_line(&ui_ctx);
                    print(&ui_ctx, &hint(&ui_ctx, "No outfits found."));
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &header_with_context(&ui_ctx, "outfits", filter_context.as_deref(), None),
            );
            blank_line(&ui_ctx);

            let columns = [
                Column::new("ID"),
                Column::new("Name"),
                Column::numeric("Items"),
                Column::numeric("Wears"),
                Column::numeric("Total"),
                Column::numeric("Per Wear"),
            ];
            let rows: Vec<Vec<String>> = outfits
                .iter()
                .filter_map(|o| summaries.get(&o.id).map(|s| outfit_row(o, s, &currency)))
                .collect();
            print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    &format!(
                        "{} outfits, {} wears in total.",
                        report.total_outfits, report.total_wears
                    ),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            for outfit in &outfits {
                let Some(summary) = summaries.get(&outfit.id) else {
                    continue;
                };
                println!(
                    "{} {} {} {} {}",
                    outfit.id,
                    outfit.wear_count,
                    format_money(summary.total_cost, &currency),
                    format_optional_money(summary.cost_per_wear, &currency),
                    outfit.name
                );
            }
        }
    }

    Ok(())
}

fn build_filter_context(args: &OutfitListArgs) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(ref o) = args.occasion {
        parts.push(format!("occasion: {}", o));
    }
    if let Some(ref s) = args.season {
        parts.push(format!("season: {}", s));
    }
    if args.favorite {
        parts.push("favorites".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let outfit = require_outfit(&store, &args.id)?;
    let summary = summarize_outfit(&outfit, store.garments())?;

    if args.json {
        let output = serde_json::to_string_pretty(&outfit_json(&outfit, &summary))?;
        println!("{}", output);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None)?;
    print_outfit(&ui_ctx, &outfit, &summary, store.garments(), &ctx.currency());
    Ok(())
}

pub fn handle_wear(ctx: &AppContext, args: &WearArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let date = parse_wear_date(args.date.as_deref())?;
    let outfit = require_outfit(&store, &args.id)?;

    let updated = store.log_outfit_wear(&outfit.id, date)?;
    store.save()?;
    info!(
        outfit = %updated.id,
        wears = updated.wear_count,
        garments = updated.items.len(),
        "logged outfit wear"
    );

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let id = updated.id.to_string();
        let wears = updated.wear_count.to_string();
        let last_worn = format_date(updated.last_worn);
        let mut distinct = updated.items.clone();
        distinct.sort();
        distinct.dedup();
        let garments = distinct.len().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Logged wear of {}", updated.name),
                &[
                    ("Id", id.as_str()),
                    ("Wears", wears.as_str()),
                    ("Last Worn", last_worn.as_str()),
                    ("Garments Updated", garments.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
