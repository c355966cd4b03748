use wardrobe_core::analytics::{
    advice_tip, summarize_collection, CollectionSummary, GarmentBrief, QuickStats,
    SustainabilityBand,
};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::ui::theme::{styled, styles};
use crate::ui::{
    badge, blank_line, bullet, format_money, format_optional_money, format_wears,
    header_with_context, hint, kv, print, section, table, Badge, Column, OutputMode, UiContext,
};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;

    let summary = summarize_collection(store.garments())?;
    let quick = QuickStats::from_garments(store.garments());
    let tip = advice_tip(&summary);

    if ui_ctx.mode.is_json() {
        let output = serde_json::json!({
            "summary": summary,
            "quick_stats": quick,
            "tip": tip,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let currency = ctx.currency();
    match ui_ctx.mode {
        OutputMode::Pretty => {
            let path = store.path().to_string_lossy().to_string();
            print(
                &ui_ctx,
                &header_with_context(&ui_ctx, "stats", None, Some(&path)),
            );
            blank_line(&ui_ctx);
            print_pretty(&ui_ctx, &summary, &quick, &currency);
            blank_line(&ui_ctx);
            print(&ui_ctx, &hint(&ui_ctx, &tip));
        }
        OutputMode::Plain | OutputMode::Json => {
            print_plain(&summary, &quick, &currency);
            println!("tip={}", tip);
        }
    }

    Ok(())
}

fn band_badge(band: SustainabilityBand) -> Badge {
    match band {
        SustainabilityBand::Excellent => Badge::Ok,
        SustainabilityBand::Good => Badge::Info,
        SustainabilityBand::Underused => Badge::Warn,
        SustainabilityBand::Dormant => Badge::Err,
    }
}

fn brief_label(brief: &Option<GarmentBrief>) -> String {
    match brief {
        Some(b) => format!("{} ({})", b.name, format_wears(b.wear_count)),
        None => "-".to_string(),
    }
}

fn print_pretty(ui_ctx: &UiContext, summary: &CollectionSummary, quick: &QuickStats, currency: &str) {
    print(ui_ctx, &section(ui_ctx, "Collection"));
    print(ui_ctx, &kv(ui_ctx, "Items", &summary.total_items.to_string()));
    print(ui_ctx, &kv(ui_ctx, "Favorites", &summary.favorites.to_string()));
    let total_value = styled(
        &format_money(summary.total_value, currency),
        styles::money(),
        ui_ctx.color,
    );
    print(ui_ctx, &kv(ui_ctx, "Total Value", &total_value));
    print(ui_ctx, &kv(ui_ctx, "Total Wears", &quick.total_wears.to_string()));
    print(
        ui_ctx,
        &kv(ui_ctx, "Average Wears", &format!("{:.1}", summary.average_wears)),
    );
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Average Cost Per Wear",
            &format_optional_money(summary.average_cost_per_wear, currency),
        ),
    );
    print(
        ui_ctx,
        &kv(ui_ctx, "Value Per Wear", &format_money(quick.value_per_wear, currency)),
    );
    print(ui_ctx, &kv(ui_ctx, "Most Worn", &brief_label(&summary.most_worn)));
    print(ui_ctx, &kv(ui_ctx, "Least Worn", &brief_label(&summary.least_worn)));
    blank_line(ui_ctx);

    if !summary.category_breakdown.is_empty() {
        print(ui_ctx, &section(ui_ctx, "Categories"));
        let columns = [Column::new("Category"), Column::numeric("Items")];
        let rows: Vec<Vec<String>> = summary
            .category_breakdown
            .iter()
            .map(|(category, count)| vec![category.as_str().to_string(), count.to_string()])
            .collect();
        print(ui_ctx, &table(ui_ctx, &columns, &rows));
        blank_line(ui_ctx);
    }

    if !summary.color_breakdown.is_empty() {
        print(ui_ctx, &section(ui_ctx, "Colors"));
        let columns = [Column::new("Color"), Column::numeric("Items")];
        let rows: Vec<Vec<String>> = summary
            .color_breakdown
            .iter()
            .map(|(color, count)| vec![color.clone(), count.to_string()])
            .collect();
        print(ui_ctx, &table(ui_ctx, &columns, &rows));
        blank_line(ui_ctx);
    }

    if !summary.never_worn.is_empty() {
        print(ui_ctx, &section(ui_ctx, "Never Worn"));
        for brief in &summary.never_worn {
            print(ui_ctx, &bullet(ui_ctx, &brief.name));
        }
        blank_line(ui_ctx);
    }

    let sustainability = &summary.sustainability;
    print(ui_ctx, &section(ui_ctx, "Sustainability"));
    print(
        ui_ctx,
        &badge(
            ui_ctx,
            band_badge(sustainability.band),
            &format!("{}/100 {}", sustainability.score, sustainability.band.message()),
        ),
    );
    print(
        ui_ctx,
        &kv(ui_ctx, "Active Items", &sustainability.active_items.to_string()),
    );
    print(
        ui_ctx,
        &kv(ui_ctx, "Dormant Items", &sustainability.dormant_items.to_string()),
    );
}

fn print_plain(summary: &CollectionSummary, quick: &QuickStats, currency: &str) {
    println!("total_items={}", summary.total_items);
    println!("favorites={}", summary.favorites);
    println!("total_value={}", format_money(summary.total_value, currency));
    println!("total_wears={}", quick.total_wears);
    println!("average_wears={:.1}", summary.average_wears);
    println!(
        "average_cost_per_wear={}",
        format_optional_money(summary.average_cost_per_wear, currency)
    );
    println!("value_per_wear={}", format_money(quick.value_per_wear, currency));
    if let Some(most) = &summary.most_worn {
        println!("most_worn={} {}", most.id, most.wear_count);
    }
    if let Some(least) = &summary.least_worn {
        println!("least_worn={} {}", least.id, least.wear_count);
    }
    for brief in &summary.never_worn {
        println!("never_worn={}", brief.id);
    }
    for (category, count) in &summary.category_breakdown {
        println!("category={} {}", category.as_str(), count);
    }
    for (color, count) in &summary.color_breakdown {
        println!("color={} {}", color, count);
    }
    let sustainability = &summary.sustainability;
    println!("sustainability_score={}", sustainability.score);
    println!("active_items={}", sustainability.active_items);
    println!("dormant_items={}", sustainability.dormant_items);
}
