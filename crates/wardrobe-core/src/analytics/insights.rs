//! Dashboard extras: quick totals, forgotten items, advice, and the
//! compact context handed to the styling assistant.

use std::collections::BTreeMap;

use serde::Serialize;

use super::collection::{CollectionSummary, GarmentBrief};
use super::cost::round_cents;
use crate::model::{Category, Garment, Outfit};

/// Never-worn count above which the advice switches to "build outfits".
const NEVER_WORN_TIP_THRESHOLD: usize = 3;

/// Average wear count below which the advice asks for more rotation.
const LOW_AVERAGE_WEARS: f64 = 5.0;

/// Headline totals for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStats {
    pub total_items: usize,
    /// Sum of recorded prices, rounded to cents
    pub total_value: f64,
    pub total_wears: u64,
    pub favorites: usize,
    /// Collection value spread over all recorded wears, rounded to cents; 0 with no wears
    pub value_per_wear: f64,
}

impl QuickStats {
    /// Totals over non-archived garments.
    pub fn from_garments(garments: &[Garment]) -> Self {
        let mut stats = QuickStats {
            total_items: 0,
            total_value: 0.0,
            total_wears: 0,
            favorites: 0,
            value_per_wear: 0.0,
        };
        for garment in garments.iter().filter(|g| !g.is_archived()) {
            stats.total_items += 1;
            stats.total_value += garment.purchase_price.unwrap_or(0.0);
            stats.total_wears += u64::from(garment.wear_count);
            if garment.favorite {
                stats.favorites += 1;
            }
        }
        if stats.total_wears > 0 {
            stats.value_per_wear = round_cents(stats.total_value / stats.total_wears as f64);
        }
        stats.total_value = round_cents(stats.total_value);
        stats
    }
}

/// The `limit` least-worn non-archived garments, fewest wears first.
///
/// Ties keep input order.
pub fn forgotten_items(garments: &[Garment], limit: usize) -> Vec<GarmentBrief> {
    let mut candidates: Vec<&Garment> = garments.iter().filter(|g| !g.is_archived()).collect();
    candidates.sort_by_key(|g| g.wear_count);
    candidates
        .into_iter()
        .take(limit)
        .map(GarmentBrief::from)
        .collect()
}

/// One-line advice derived from a collection summary.
pub fn advice_tip(summary: &CollectionSummary) -> String {
    let never_worn = summary.never_worn.len();
    if never_worn > NEVER_WORN_TIP_THRESHOLD {
        format!(
            "You have {} never-worn items. Try building an outfit around them.",
            never_worn
        )
    } else if summary.average_wears < LOW_AVERAGE_WEARS {
        "Wear your clothes more often to get better value from them.".to_string()
    } else {
        "Great! You are using your wardrobe effectively.".to_string()
    }
}

/// Compact wardrobe description sent along with styling requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylistContext {
    pub wardrobe_count: usize,
    pub category_counts: BTreeMap<Category, usize>,
    pub outfit_count: usize,
}

impl StylistContext {
    pub fn new(garments: &[Garment], outfits: &[Outfit]) -> Self {
        let mut category_counts = BTreeMap::new();
        let mut wardrobe_count = 0;
        for garment in garments.iter().filter(|g| !g.is_archived()) {
            wardrobe_count += 1;
            *category_counts.entry(garment.category).or_insert(0) += 1;
        }
        Self {
            wardrobe_count,
            category_counts,
            outfit_count: outfits.len(),
        }
    }
}
