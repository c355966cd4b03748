use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::info;

use wardrobe_core::model::{Category, Color, Garment, GarmentType, Season};
use wardrobe_core::store::GarmentFilter;
use wardrobe_core::WardrobeStore;

use crate::app::AppContext;
use crate::cli::{ArchiveArgs, GarmentAddArgs, GarmentListArgs, ShowArgs, WearArgs};
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::errors::CliError;
use crate::helpers::{parse_token, parse_tokens, parse_wear_date, require_garment};
use crate::output::{garment_json, garment_row, garments_json, print_garment};
use crate::ui::{
    blank_line, format_date, format_optional_money, header_with_context, hint, print, receipt,
    short_id, simple_table, Column, OutputMode,
};

/// Build a garment from `garments add` arguments.
///
/// A garment type token ("jeans") sets both the type and its category.
fn garment_from_args(args: &GarmentAddArgs) -> anyhow::Result<Garment> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input("Garment name must not be empty").into());
    }
    let color = Color::parse(&args.color)?;
    let mut garment = match args.category.parse::<GarmentType>() {
        Ok(garment_type) => {
            Garment::new(name, garment_type.category(), color).with_type(garment_type)
        }
        Err(_) => Garment::new(name, args.category.parse::<Category>()?, color),
    };

    if let Some(ref secondary) = args.secondary_color {
        garment = garment.with_secondary_color(Color::parse(secondary)?);
    }
    if let Some(ref brand) = args.brand {
        garment = garment.with_brand(brand.trim());
    }
    if let Some(ref material) = args.material {
        garment = garment.with_material(material.trim());
    }
    if let Some(price) = args.price {
        garment = garment.with_price(price);
    }
    let seasons: Vec<Season> = parse_tokens(&args.seasons)?;
    Ok(garment.with_seasons(seasons).with_favorite(args.favorite))
}

pub fn handle_add(ctx: &AppContext, args: &GarmentAddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let garment = garment_from_args(args)?;

    let id = store.upsert_garment(garment.clone())?;
    store.save()?;
    info!(garment = %id, category = garment.category.as_str(), "added garment");

    if args.json {
        let output = serde_json::to_string_pretty(&garment_json(&garment, garment.cost_per_wear()?))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let id = id.to_string();
        let price = format_optional_money(garment.purchase_price, &ctx.currency());
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Added {}", garment.name),
                &[
                    ("Id", id.as_str()),
                    ("Category", garment.category.as_str()),
                    ("Color", garment.primary_color.as_str()),
                    ("Price", price.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &GarmentListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;

    let mut filter = GarmentFilter::new().include_archived(args.archived);
    if let Some(category) = parse_token::<Category>(args.category.as_deref())? {
        filter = filter.category(category);
    }
    if let Some(ref color) = args.color {
        filter = filter.color(Color::parse(color)?);
    }
    if args.favorite {
        filter = filter.favorite(true);
    }
    if let Some(ref text) = args.search {
        filter = filter.search(text.clone());
    }
    filter = filter.limit(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    let garments = store.list_garments(&filter)?;

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&garments_json(&garments)?)?;
        println!("{}", output);
        return Ok(());
    }

    let currency = ctx.currency();
    let filter_context = build_filter_context(args);

    if garments.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(
                        &ui_ctx,
                        &header_with_context(&ui_ctx, "garments", filter_context.as_deref(), None),
                    );
                    blank_line(&ui_ctx);
                    print(
                        &ui_ctx,
                        &hint(&ui_ctx, "No garments found. Try a broader filter."),
                    );
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
                &header_with_context(&ui_ctx, "garments", filter_context.as_deref(), None),
            );
            blank_line(&ui_ctx);

            let columns = [
                Column::new("ID"),
                Column::new("Name"),
                Column::new("Category"),
                Column::new("Color"),
                Column::numeric("Wears"),
                Column::numeric("Price"),
                Column::numeric("Per Wear"),
            ];
            let rows = garments
                .iter()
                .map(|g| garment_row(g, &currency))
                .collect::<anyhow::Result<Vec<_>>>()?;
            print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
            blank_line(&ui_ctx);

            if let Some(first) = garments.first() {
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        &format!(
                            "{} garments. wardrobe garments show {}  \u{00B7}  wardrobe garments wear {}",
                            garments.len(),
                            short_id(&first.id),
                            short_id(&first.id)
                        ),
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            for garment in &garments {
                println!(
                    "{} {} {} {} {}",
                    garment.id,
                    garment.category.as_str(),
                    garment.wear_count,
                    format_optional_money(garment.cost_per_wear()?, &currency),
                    garment.name
                );
            }
        }
    }

    Ok(())
}

fn build_filter_context(args: &GarmentListArgs) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(ref c) = args.category {
        parts.push(format!("category: {}", c));
    }
    if let Some(ref c) = args.color {
        parts.push(format!("color: {}", c));
    }
    if args.favorite {
        parts.push("favorites".to_string());
    }
    if let Some(ref s) = args.search {
        parts.push(format!("\"{}\"", s));
    }
    if args.archived {
        parts.push("with archived".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let garment = require_garment(&store, &args.id)?;

    if args.json {
        let output = serde_json::to_string_pretty(&garment_json(&garment, garment.cost_per_wear()?))?;
        println!("{}", output);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None)?;
    print_garment(&ui_ctx, &garment, &ctx.currency())
}

pub fn handle_wear(ctx: &AppContext, args: &WearArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let date = parse_wear_date(args.date.as_deref())?;
    let garment = require_garment(&store, &args.id)?;

    let updated = store.log_garment_wear(&garment.id, date)?;
    store.save()?;
    info!(garment = %updated.id, wears = updated.wear_count, "logged garment wear");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let currency = ctx.currency();
        let id = updated.id.to_string();
        let wears = updated.wear_count.to_string();
        let last_worn = format_date(updated.last_worn);
        let cpw = format_optional_money(updated.cost_per_wear()?, &currency);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Logged wear of {}", updated.name),
                &[
                    ("Id", id.as_str()),
                    ("Wears", wears.as_str()),
                    ("Last Worn", last_worn.as_str()),
                    ("Cost Per Wear", cpw.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_archive(ctx: &AppContext, args: &ArchiveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let garment = require_garment(&store, &args.id)?;
    let ui_ctx = ctx.ui_context(false, None)?;

    if garment.is_archived() {
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &hint(&ui_ctx, &format!("{} is already archived.", garment.name)),
            );
        }
        return Ok(());
    }

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to archive without confirmation. Pass --yes to skip the prompt.",
            )
            .into());
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Archive \"{}\"?", garment.name))
            .default(false)
            .interact()?;
        if !confirmed {
            print(&ui_ctx, &hint(&ui_ctx, "Nothing archived."));
            return Ok(());
        }
    }

    let archived = store.archive_garment(&garment.id)?;
    store.save()?;
    info!(garment = %archived.id, "archived garment");

    if !ctx.quiet() {
        let id = archived.id.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Archived {}", archived.name),
                &[
                    ("Id", id.as_str()),
                    ("Status", archived.status.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
