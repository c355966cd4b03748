use wardrobe_core::analytics::{forgotten_items, StylistContext};

use crate::app::AppContext;
use crate::cli::ForgottenArgs;
use crate::ui::{
    blank_line, format_wears, header, hint, print, short_id, simple_table, Column, OutputMode,
};

pub fn handle_forgotten(ctx: &AppContext, args: &ForgottenArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;

    let limit = args.limit.unwrap_or_else(|| ctx.forgotten_limit());
    let items = forgotten_items(store.garments(), limit);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "forgotten", None));
            blank_line(&ui_ctx);
            if items.is_empty() {
                print(&ui_ctx, &hint(&ui_ctx, "Nothing in the wardrobe yet."));
                return Ok(());
            }
            let columns = [
                Column::new("ID"),
                Column::new("Name"),
                Column::new("Category"),
                Column::numeric("Worn"),
            ];
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| {
                    vec![
                        short_id(&item.id),
                        item.name.clone(),
                        item.category.as_str().to_string(),
                        format_wears(item.wear_count),
                    ]
                })
                .collect();
            print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
            blank_line(&ui_ctx);
            if let Some(first) = items.first() {
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        &format!("Wear it: wardrobe garments wear {}", short_id(&first.id)),
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            for item in &items {
                println!(
                    "{} {} {} {}",
                    item.id,
                    item.category.as_str(),
                    item.wear_count,
                    item.name
                );
            }
        }
    }

    Ok(())
}

pub fn handle_context(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let context = StylistContext::new(store.garments(), store.outfits());
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
