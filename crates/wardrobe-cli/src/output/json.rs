//! JSON output formatting for garments and outfits.

use wardrobe_core::analytics::OutfitSummary;
use wardrobe_core::model::{Garment, Outfit};

/// Convert a garment to JSON for output, with its cost per wear.
pub fn garment_json(garment: &Garment, cost_per_wear: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "id": garment.id,
        "name": garment.name,
        "category": garment.category,
        "garment_type": garment.garment_type,
        "primary_color": garment.primary_color,
        "primary_color_hex": garment.primary_color.hex(),
        "secondary_color": garment.secondary_color,
        "brand": garment.brand,
        "material": garment.material,
        "seasons": garment.seasons,
        "purchase_price": garment.purchase_price,
        "wear_count": garment.wear_count,
        "last_worn": garment.last_worn,
        "favorite": garment.favorite,
        "status": garment.status,
        "created_at": garment.created_at,
        "cost_per_wear": cost_per_wear,
    })
}

/// Convert garments to a JSON array, computing each cost per wear.
pub fn garments_json(garments: &[Garment]) -> anyhow::Result<Vec<serde_json::Value>> {
    garments
        .iter()
        .map(|garment| Ok(garment_json(garment, garment.cost_per_wear()?)))
        .collect()
}

/// Convert an outfit and its cost summary to JSON for output.
pub fn outfit_json(outfit: &Outfit, summary: &OutfitSummary) -> serde_json::Value {
    serde_json::json!({
        "id": outfit.id,
        "name": outfit.name,
        "items": outfit.items,
        "occasions": outfit.occasions,
        "seasons": outfit.seasons,
        "wear_count": outfit.wear_count,
        "last_worn": outfit.last_worn,
        "favorite": outfit.favorite,
        "created_at": outfit.created_at,
        "total_cost": summary.total_cost,
        "cost_per_wear": summary.cost_per_wear,
        "projected": summary.is_projected(),
        "unresolved": summary.unresolved,
    })
}
