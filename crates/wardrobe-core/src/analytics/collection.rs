//! Collection-level statistics.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::cost::round_cents;
use super::sustainability::SustainabilityReport;
use crate::error::Result;
use crate::model::{Category, Garment};

/// A garment as it appears inside an aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentBrief {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub wear_count: u32,
}

impl From<&Garment> for GarmentBrief {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id,
            name: garment.name.clone(),
            category: garment.category,
            wear_count: garment.wear_count,
        }
    }
}

/// Summary of a garment collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSummary {
    /// Number of non-archived garments considered
    pub total_items: usize,

    /// Garments per category; empty categories are omitted
    pub category_breakdown: BTreeMap<Category, usize>,

    /// Garments per lower-cased primary color
    pub color_breakdown: BTreeMap<String, usize>,

    /// Sum of recorded prices rounded to cents; unpriced garments add nothing
    pub total_value: f64,

    /// Mean wear count, 0 for an empty collection
    pub average_wears: f64,

    /// Highest wear count, first garment on ties
    pub most_worn: Option<GarmentBrief>,

    /// Lowest wear count among worn garments, first garment on ties
    pub least_worn: Option<GarmentBrief>,

    /// Garments with zero wears, in input order
    pub never_worn: Vec<GarmentBrief>,

    pub favorites: usize,

    /// Mean of the defined per-garment cost-per-wear values
    pub average_cost_per_wear: Option<f64>,

    pub sustainability: SustainabilityReport,
}

impl CollectionSummary {
    /// Garments worn at least once.
    pub fn worn_items(&self) -> usize {
        self.total_items - self.never_worn.len()
    }
}

/// Fold a garment collection into a [`CollectionSummary`].
///
/// Archived garments are skipped. Every other garment is validated before
/// anything is counted, so a malformed record fails the whole call instead
/// of skewing the figures.
///
/// # Errors
///
/// Returns `WardrobeError::Validation` for the first garment that violates
/// its invariants.
pub fn summarize_collection(garments: &[Garment]) -> Result<CollectionSummary> {
    let active: Vec<&Garment> = garments.iter().filter(|g| !g.is_archived()).collect();
    for garment in &active {
        garment.validate()?;
    }

    let mut category_breakdown = BTreeMap::new();
    let mut color_breakdown = BTreeMap::new();
    let mut total_value = 0.0;
    let mut total_wears: u64 = 0;
    let mut most_worn: Option<&Garment> = None;
    let mut least_worn: Option<&Garment> = None;
    let mut never_worn = Vec::new();
    let mut favorites = 0;
    let mut cpw_sum = 0.0;
    let mut cpw_count = 0usize;

    for garment in active.iter().copied() {
        *category_breakdown.entry(garment.category).or_insert(0) += 1;
        *color_breakdown
            .entry(garment.primary_color.as_str().to_string())
            .or_insert(0) += 1;

        total_value += garment.purchase_price.unwrap_or(0.0);
        total_wears += u64::from(garment.wear_count);

        if most_worn.map_or(true, |best| garment.wear_count > best.wear_count) {
            most_worn = Some(garment);
        }
        if garment.wear_count == 0 {
            never_worn.push(GarmentBrief::from(garment));
        } else if least_worn.map_or(true, |best| garment.wear_count < best.wear_count) {
            least_worn = Some(garment);
        }

        if garment.favorite {
            favorites += 1;
        }

        if let Some(cpw) = garment.cost_per_wear()? {
            cpw_sum += cpw;
            cpw_count += 1;
        }
    }

    let total_items = active.len();
    let average_wears = if total_items == 0 {
        0.0
    } else {
        total_wears as f64 / total_items as f64
    };
    let average_cost_per_wear = if cpw_count == 0 {
        None
    } else {
        Some(round_cents(cpw_sum / cpw_count as f64))
    };

    debug!(
        total_items,
        skipped_archived = garments.len() - total_items,
        priced_and_worn = cpw_count,
        "summarized collection"
    );

    Ok(CollectionSummary {
        total_items,
        category_breakdown,
        color_breakdown,
        total_value: round_cents(total_value),
        average_wears,
        most_worn: most_worn.map(GarmentBrief::from),
        least_worn: least_worn.map(GarmentBrief::from),
        never_worn,
        favorites,
        average_cost_per_wear,
        sustainability: SustainabilityReport::from_garments(active.iter().copied()),
    })
}
