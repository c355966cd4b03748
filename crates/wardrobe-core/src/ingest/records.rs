//! Loosely typed rows as they come from the backend.
//!
//! Field names follow the backend's snake_case columns. Numbers are kept
//! signed and enumerations are kept as strings so that malformed rows can
//! be reported precisely instead of failing deserialization of the whole
//! snapshot.

use serde::{Deserialize, Serialize};

use crate::model::{Garment, Outfit};

/// A garment row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Category token, or a garment type token
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garment_type: Option<String>,

    #[serde(alias = "primary_color")]
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(default)]
    pub seasons: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,

    #[serde(default, alias = "wear_count")]
    pub times_worn: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<String>,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Soft-delete flag; overrides `status` when set
    #[serde(default)]
    pub archived: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// An outfit row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    pub id: String,

    pub name: String,

    /// Garment ids in display order
    #[serde(default)]
    pub items: Vec<String>,

    #[serde(default)]
    pub occasions: Vec<String>,

    #[serde(default)]
    pub seasons: Vec<String>,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default, alias = "wear_count")]
    pub times_worn: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Everything a user owns, as stored on disk or returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardrobeSnapshot {
    #[serde(default)]
    pub garments: Vec<GarmentRecord>,

    #[serde(default)]
    pub outfits: Vec<OutfitRecord>,
}

impl From<&Garment> for GarmentRecord {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id.to_string(),
            name: Some(garment.name.clone()),
            category: garment.category.as_str().to_string(),
            garment_type: garment.garment_type.map(|t| t.as_str().to_string()),
            color: garment.primary_color.as_str().to_string(),
            secondary_color: garment
                .secondary_color
                .as_ref()
                .map(|c| c.as_str().to_string()),
            brand: garment.brand.clone(),
            material: garment.material.clone(),
            seasons: garment.seasons.iter().map(|s| s.as_str().to_string()).collect(),
            purchase_price: garment.purchase_price,
            times_worn: i64::from(garment.wear_count),
            last_worn: garment.last_worn.map(|d| d.format("%Y-%m-%d").to_string()),
            favorite: garment.favorite,
            status: Some(garment.status.as_str().to_string()),
            archived: garment.is_archived(),
            created_at: Some(garment.created_at.to_rfc3339()),
        }
    }
}

impl From<&Outfit> for OutfitRecord {
    fn from(outfit: &Outfit) -> Self {
        Self {
            id: outfit.id.to_string(),
            name: outfit.name.clone(),
            items: outfit.items.iter().map(|id| id.to_string()).collect(),
            occasions: outfit.occasions.iter().map(|o| o.as_str().to_string()).collect(),
            seasons: outfit.seasons.iter().map(|s| s.as_str().to_string()).collect(),
            favorite: outfit.favorite,
            times_worn: i64::from(outfit.wear_count),
            last_worn: outfit.last_worn.map(|d| d.format("%Y-%m-%d").to_string()),
            created_at: Some(outfit.created_at.to_rfc3339()),
        }
    }
}

impl WardrobeSnapshot {
    pub fn from_domain(garments: &[Garment], outfits: &[Outfit]) -> Self {
        Self {
            garments: garments.iter().map(GarmentRecord::from).collect(),
            outfits: outfits.iter().map(OutfitRecord::from).collect(),
        }
    }
}
