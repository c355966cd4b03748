//! Outfit-level cost figures.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use super::cost::round_cents;
use crate::error::Result;
use crate::model::{Garment, Outfit};

/// Cost figures for one outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitSummary {
    pub id: Uuid,
    pub name: String,

    /// Number of garment references, duplicates included
    pub item_count: usize,

    pub wear_count: u32,

    /// Sum of referenced garments' prices; unpriced garments add nothing
    pub total_cost: f64,

    /// `total_cost / wear_count` once worn, the projected `total_cost`
    /// before the first wear, `None` when no referenced garment has a price
    pub cost_per_wear: Option<f64>,

    /// References that did not resolve to a garment in the collection
    pub unresolved: Vec<Uuid>,
}

impl OutfitSummary {
    /// True when `cost_per_wear` is a projection for a never-worn outfit.
    pub fn is_projected(&self) -> bool {
        self.wear_count == 0 && self.cost_per_wear.is_some()
    }
}

/// Totals over a list of outfits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitReport {
    pub outfits: Vec<OutfitSummary>,
    pub total_outfits: usize,
    pub total_wears: u64,
    pub favorites: usize,
    /// Highest outfit wear count, first outfit on ties
    pub most_worn: Option<Uuid>,
}

fn index_garments(garments: &[Garment]) -> HashMap<Uuid, &Garment> {
    garments.iter().map(|g| (g.id, g)).collect()
}

fn summarize_indexed(outfit: &Outfit, index: &HashMap<Uuid, &Garment>) -> Result<OutfitSummary> {
    outfit.validate()?;

    let mut total_cost = 0.0;
    let mut priced = false;
    let mut unresolved = Vec::new();

    for garment_id in &outfit.items {
        match index.get(garment_id) {
            Some(garment) => {
                garment.validate()?;
                if let Some(price) = garment.purchase_price {
                    total_cost += price;
                    priced = true;
                }
            }
            None => unresolved.push(*garment_id),
        }
    }

    if !unresolved.is_empty() {
        warn!(
            outfit = %outfit.id,
            missing = unresolved.len(),
            "outfit references garments that are not in the collection"
        );
    }

    let cost_per_wear = if !priced {
        None
    } else if outfit.wear_count > 0 {
        Some(round_cents(total_cost / f64::from(outfit.wear_count)))
    } else {
        Some(round_cents(total_cost))
    };

    Ok(OutfitSummary {
        id: outfit.id,
        name: outfit.name.clone(),
        item_count: outfit.items.len(),
        wear_count: outfit.wear_count,
        total_cost,
        cost_per_wear,
        unresolved,
    })
}

/// Cost figures for a single outfit against the resolved garment collection.
///
/// Unlike the garment-level calculation, a never-worn outfit reports its
/// total cost as the cost per wear.
///
/// # Errors
///
/// Returns `WardrobeError::Validation` if the outfit or a referenced garment
/// violates its invariants.
pub fn summarize_outfit(outfit: &Outfit, garments: &[Garment]) -> Result<OutfitSummary> {
    summarize_indexed(outfit, &index_garments(garments))
}

/// Cost figures for every outfit, plus totals.
pub fn summarize_outfits(outfits: &[Outfit], garments: &[Garment]) -> Result<OutfitReport> {
    let index = index_garments(garments);
    let summaries = outfits
        .iter()
        .map(|outfit| summarize_indexed(outfit, &index))
        .collect::<Result<Vec<_>>>()?;

    let mut most_worn: Option<&Outfit> = None;
    for outfit in outfits {
        if most_worn.map_or(true, |best| outfit.wear_count > best.wear_count) {
            most_worn = Some(outfit);
        }
    }

    debug!(outfits = outfits.len(), "summarized outfits");

    Ok(OutfitReport {
        total_outfits: outfits.len(),
        total_wears: outfits.iter().map(|o| u64::from(o.wear_count)).sum(),
        favorites: outfits.iter().filter(|o| o.favorite).count(),
        most_worn: most_worn.map(|o| o.id),
        outfits: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Color};

    fn priced(name: &str, price: Option<f64>) -> Garment {
        let garment = Garment::new(name, Category::Tops, Color::parse("black").unwrap());
        match price {
            Some(p) => garment.with_price(p),
            None => garment,
        }
    }

    #[test]
    fn test_never_worn_outfit_projects_total_cost() {
        let top = priced("top", Some(30.0));
        let bottom = priced("bottom", Some(20.0));
        let outfit = Outfit::new("Office", vec![top.id, bottom.id]);

        let summary = summarize_outfit(&outfit, &[top, bottom]).unwrap();
        assert_eq!(summary.total_cost, 50.0);
        assert_eq!(summary.cost_per_wear, Some(50.0));
        assert!(summary.is_projected());
    }

    #[test]
    fn test_worn_outfit_divides_by_outfit_wears() {
        let top = priced("top", Some(30.0));
        let bottom = priced("bottom", Some(20.0));
        let outfit = Outfit::new("Office", vec![top.id, bottom.id]).with_wears(4, None);

        let summary = summarize_outfit(&outfit, &[top, bottom]).unwrap();
        assert_eq!(summary.cost_per_wear, Some(12.5));
        assert!(!summary.is_projected());
    }

    #[test]
    fn test_unpriced_outfit_is_undefined() {
        let top = priced("top", None);
        let outfit = Outfit::new("Gym", vec![top.id]).with_wears(2, None);

        let summary = summarize_outfit(&outfit, &[top]).unwrap();
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.cost_per_wear, None);
    }

    #[test]
    fn test_missing_prices_contribute_zero() {
        let top = priced("top", Some(40.0));
        let shoes = priced("shoes", None);
        let outfit = Outfit::new("Weekend", vec![top.id, shoes.id]).with_wears(2, None);

        let summary = summarize_outfit(&outfit, &[top, shoes]).unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cost, 40.0);
        assert_eq!(summary.cost_per_wear, Some(20.0));
    }

    #[test]
    fn test_unresolved_references_are_reported() {
        let top = priced("top", Some(10.0));
        let ghost = Uuid::new_v4();
        let outfit = Outfit::new("Partial", vec![top.id, ghost]);

        let summary = summarize_outfit(&outfit, &[top]).unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.unresolved, vec![ghost]);
        assert_eq!(summary.total_cost, 10.0);
    }

    #[test]
    fn test_report_totals_and_tie_break() {
        let top = priced("top", Some(10.0));
        let first = Outfit::new("First", vec![top.id]).with_wears(3, None);
        let second = Outfit::new("Second", vec![top.id])
            .with_wears(3, None)
            .with_favorite(true);
        let third = Outfit::new("Third", vec![]);
        let outfits = vec![first.clone(), second, third];

        let report = summarize_outfits(&outfits, &[top]).unwrap();
        assert_eq!(report.total_outfits, 3);
        assert_eq!(report.total_wears, 6);
        assert_eq!(report.favorites, 1);
        assert_eq!(report.most_worn, Some(first.id));
        assert_eq!(report.outfits[2].cost_per_wear, None);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let top = priced("top", Some(10.0));
        let garments = vec![top.clone()];
        let outfits = vec![Outfit::new("Only", vec![top.id])];
        let before = (garments.clone(), outfits.clone());

        summarize_outfits(&outfits, &garments).unwrap();
        assert_eq!((garments, outfits), before);
    }

    #[test]
    fn test_empty_outfit_list() {
        let report = summarize_outfits(&[], &[]).unwrap();
        assert_eq!(report.total_outfits, 0);
        assert!(report.outfits.is_empty());
        assert!(report.most_worn.is_none());
    }
}
