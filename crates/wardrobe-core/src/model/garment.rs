//! The garment record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{Category, GarmentType};
use super::color::Color;
use super::tags::{GarmentStatus, Season};
use crate::analytics::cost::cost_per_wear;
use crate::error::{Result, WardrobeError};

/// One physical clothing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Identifier owned by the backing store
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Coarse category used for breakdowns
    pub category: Category,

    /// Optional fine-grained type (always agrees with `category`)
    pub garment_type: Option<GarmentType>,

    pub primary_color: Color,

    pub secondary_color: Option<Color>,

    pub brand: Option<String>,

    pub material: Option<String>,

    /// Acquisition price; `None` means no cost was recorded
    pub purchase_price: Option<f64>,

    /// Number of recorded wears; only ever increases
    pub wear_count: u32,

    /// Date of the most recent wear; `None` while never worn
    pub last_worn: Option<NaiveDate>,

    pub favorite: bool,

    pub status: GarmentStatus,

    pub seasons: Vec<Season>,

    pub created_at: DateTime<Utc>,
}

impl Garment {
    pub fn new(name: impl Into<String>, category: Category, primary_color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            garment_type: None,
            primary_color,
            secondary_color: None,
            brand: None,
            material: None,
            purchase_price: None,
            wear_count: 0,
            last_worn: None,
            favorite: false,
            status: GarmentStatus::Active,
            seasons: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the fine-grained type; the category follows the type.
    pub fn with_type(mut self, garment_type: GarmentType) -> Self {
        self.garment_type = Some(garment_type);
        self.category = garment_type.category();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Set the wear history directly (used when loading existing records).
    pub fn with_wears(mut self, wear_count: u32, last_worn: Option<NaiveDate>) -> Self {
        self.wear_count = wear_count;
        self.last_worn = last_worn;
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_status(mut self, status: GarmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_seasons(mut self, seasons: Vec<Season>) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_archived(&self) -> bool {
        self.status.is_archived()
    }

    /// Cost per wear rounded to cents, or `None` when there is no price or no wear.
    pub fn cost_per_wear(&self) -> Result<Option<f64>> {
        cost_per_wear(self.purchase_price, self.wear_count)
    }

    /// Check the record's invariants.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::Validation` if:
    /// - The price is negative or not finite
    /// - The garment has a last-worn date but no recorded wears
    /// - The fine-grained type belongs to a different category
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.purchase_price {
            validate_price(price, &self.name)?;
        }
        if self.wear_count == 0 && self.last_worn.is_some() {
            return Err(WardrobeError::validation(format!(
                "garment \"{}\" has a last-worn date but no recorded wears",
                self.name
            )));
        }
        if let Some(garment_type) = self.garment_type {
            if garment_type.category() != self.category {
                return Err(WardrobeError::validation(format!(
                    "garment \"{}\" is a {} but is filed under {}",
                    self.name, garment_type, self.category
                )));
            }
        }
        Ok(())
    }

    /// Record one wear on `date`.
    ///
    /// The last-worn date only moves forward; logging an older date still
    /// counts the wear.
    pub fn record_wear(&mut self, date: NaiveDate) {
        self.wear_count = self.wear_count.saturating_add(1);
        self.last_worn = Some(match self.last_worn {
            Some(previous) if previous > date => previous,
            _ => date,
        });
    }
}

pub(crate) fn validate_price(price: f64, owner: &str) -> Result<()> {
    if !price.is_finite() {
        return Err(WardrobeError::validation(format!(
            "price for \"{}\" is not a finite number",
            owner
        )));
    }
    if price < 0.0 {
        return Err(WardrobeError::validation(format!(
            "price for \"{}\" is negative ({})",
            owner, price
        )));
    }
    Ok(())
}
