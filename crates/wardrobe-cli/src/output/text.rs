//! Text and table output formatting for garments and outfits.

use std::collections::HashMap;

use uuid::Uuid;
use wardrobe_core::analytics::OutfitSummary;
use wardrobe_core::model::{Color, Garment, Outfit};

use crate::ui::{
    blank_line, format_date, format_money, format_optional_money, format_wears, header, join_labels,
    kv, print, short_id, truncate, OutputMode, UiContext,
};

const NAME_MAX: usize = 32;

/// Color name with its hex value when it is a palette color.
fn color_label(color: &Color) -> String {
    match color.hex() {
        Some(hex) => format!("{} ({})", color.as_str(), hex),
        None => color.as_str().to_string(),
    }
}

/// Table row for a garment list.
pub fn garment_row(garment: &Garment, currency: &str) -> anyhow::Result<Vec<String>> {
    let mut name = truncate(&garment.name, NAME_MAX);
    if garment.favorite {
        name.push_str(" *");
    }
    Ok(vec![
        short_id(&garment.id),
        name,
        garment.category.as_str().to_string(),
        garment.primary_color.as_str().to_string(),
        garment.wear_count.to_string(),
        format_optional_money(garment.purchase_price, currency),
        format_optional_money(garment.cost_per_wear()?, currency),
    ])
}

/// Table row for an outfit list.
pub fn outfit_row(outfit: &Outfit, summary: &OutfitSummary, currency: &str) -> Vec<String> {
    let mut name = truncate(&outfit.name, NAME_MAX);
    if outfit.favorite {
        name.push_str(" *");
    }
    let mut cpw = format_optional_money(summary.cost_per_wear, currency);
    if summary.is_projected() {
        cpw.push_str(" (projected)");
    }
    vec![
        short_id(&outfit.id),
        name,
        summary.item_count.to_string(),
        outfit.wear_count.to_string(),
        format_money(summary.total_cost, currency),
        cpw,
    ]
}

/// Print a single garment in detail.
pub fn print_garment(ui_ctx: &UiContext, garment: &Garment, currency: &str) -> anyhow::Result<()> {
    let cost_per_wear = garment.cost_per_wear()?;

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(ui_ctx, &header(ui_ctx, "garments show", Some(&short_id(&garment.id))));
            blank_line(ui_ctx);
        }
        OutputMode::Plain | OutputMode::Json => {
            print(ui_ctx, &kv(ui_ctx, "id", &garment.id.to_string()));
        }
    }

    let kind = match garment.garment_type {
        Some(t) => format!("{} ({})", garment.category.as_str(), t.as_str()),
        None => garment.category.as_str().to_string(),
    };
    let color = match &garment.secondary_color {
        Some(secondary) => format!(
            "{} / {}",
            color_label(&garment.primary_color),
            color_label(secondary)
        ),
        None => color_label(&garment.primary_color),
    };
    let seasons: Vec<&str> = garment.seasons.iter().map(|s| s.as_str()).collect();

    let mut lines = vec![
        kv(ui_ctx, "Name", &garment.name),
        kv(ui_ctx, "Category", &kind),
        kv(ui_ctx, "Color", &color),
    ];
    if let Some(brand) = &garment.brand {
        lines.push(kv(ui_ctx, "Brand", brand));
    }
    if let Some(material) = &garment.material {
        lines.push(kv(ui_ctx, "Material", material));
    }
    lines.push(kv(ui_ctx, "Seasons", &join_labels(&seasons)));
    lines.push(kv(ui_ctx, "Status", garment.status.as_str()));
    lines.push(kv(ui_ctx, "Favorite", if garment.favorite { "yes" } else { "no" }));
    lines.push(kv(
        ui_ctx,
        "Price",
        &format_optional_money(garment.purchase_price, currency),
    ));
    lines.push(kv(ui_ctx, "Wears", &garment.wear_count.to_string()));
    lines.push(kv(ui_ctx, "Last Worn", &format_date(garment.last_worn)));
    lines.push(kv(
        ui_ctx,
        "Cost Per Wear",
        &format_optional_money(cost_per_wear, currency),
    ));

    for line in lines {
        print(ui_ctx, &line);
    }
    Ok(())
}

/// Print a single outfit in detail, listing its garments by name.
pub fn print_outfit(
    ui_ctx: &UiContext,
    outfit: &Outfit,
    summary: &OutfitSummary,
    garments: &[Garment],
    currency: &str,
) {
    let names: HashMap<Uuid, &Garment> = garments.iter().map(|g| (g.id, g)).collect();

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(ui_ctx, &header(ui_ctx, "outfits show", Some(&short_id(&outfit.id))));
            blank_line(ui_ctx);
        }
        OutputMode::Plain | OutputMode::Json => {
            print(ui_ctx, &kv(ui_ctx, "id", &outfit.id.to_string()));
        }
    }

    let occasions: Vec<&str> = outfit.occasions.iter().map(|o| o.as_str()).collect();
    let seasons: Vec<&str> = outfit.seasons.iter().map(|s| s.as_str()).collect();
    let mut cpw = format_optional_money(summary.cost_per_wear, currency);
    if summary.is_projected() {
        cpw.push_str(" (projected, never worn)");
    }

    print(ui_ctx, &kv(ui_ctx, "Name", &outfit.name));
    print(ui_ctx, &kv(ui_ctx, "Occasions", &join_labels(&occasions)));
    print(ui_ctx, &kv(ui_ctx, "Seasons", &join_labels(&seasons)));
    print(ui_ctx, &kv(ui_ctx, "Favorite", if outfit.favorite { "yes" } else { "no" }));
    print(ui_ctx, &kv(ui_ctx, "Wears", &format_wears(outfit.wear_count)));
    print(ui_ctx, &kv(ui_ctx, "Last Worn", &format_date(outfit.last_worn)));
    print(ui_ctx, &kv(ui_ctx, "Total Cost", &format_money(summary.total_cost, currency)));
    print(ui_ctx, &kv(ui_ctx, "Cost Per Wear", &cpw));

    blank_line(ui_ctx);
    for item in &outfit.items {
        let label = match names.get(item) {
            Some(garment) if garment.is_archived() => format!("{} (archived)", garment.name),
            Some(garment) => garment.name.clone(),
            None => "missing garment".to_string(),
        };
        match ui_ctx.mode {
            OutputMode::Pretty => print(ui_ctx, &format!("  {}  {}", short_id(item), label)),
            OutputMode::Plain | OutputMode::Json => {
                print(ui_ctx, &format!("item={} {}", item, label))
            }
        }
    }
}
