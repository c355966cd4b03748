//! Garment categories.
//!
//! `Category` is the coarse bucket used by the collection breakdown.
//! `GarmentType` is the finer-grained type catalog; every type belongs to
//! exactly one category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WardrobeError;

/// Coarse garment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Dresses => "dresses",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts a category token, or any garment type token (mapped onto its category).
impl FromStr for Category {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Some(category) = Category::ALL.iter().find(|c| c.as_str() == token) {
            return Ok(*category);
        }
        if let Some(garment_type) = GarmentType::ALL.iter().find(|t| t.as_str() == token) {
            return Ok(garment_type.category());
        }
        Err(WardrobeError::invalid_input(format!(
            "unknown category \"{}\"",
            s
        )))
    }
}

/// Fine-grained garment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    // Tops
    Tshirt,
    Shirt,
    Blouse,
    Polo,
    TankTop,
    Sweater,
    Cardigan,
    Hoodie,
    Sweatshirt,
    // Outerwear
    Jacket,
    Blazer,
    Coat,
    Vest,
    Parka,
    Windbreaker,
    // Bottoms
    Pants,
    Jeans,
    Shorts,
    Skirt,
    Leggings,
    Joggers,
    // Full body
    Dress,
    Jumpsuit,
    Romper,
    Suit,
    // Shoes
    Sneakers,
    Boots,
    Heels,
    Flats,
    Sandals,
    Loafers,
    FormalShoes,
    // Accessories
    Bag,
    Belt,
    Scarf,
    Hat,
    Watch,
    Jewelry,
    Sunglasses,
    Tie,
    Gloves,
}

impl GarmentType {
    pub const ALL: [GarmentType; 41] = [
        GarmentType::Tshirt,
        GarmentType::Shirt,
        GarmentType::Blouse,
        GarmentType::Polo,
        GarmentType::TankTop,
        GarmentType::Sweater,
        GarmentType::Cardigan,
        GarmentType::Hoodie,
        GarmentType::Sweatshirt,
        GarmentType::Jacket,
        GarmentType::Blazer,
        GarmentType::Coat,
        GarmentType::Vest,
        GarmentType::Parka,
        GarmentType::Windbreaker,
        GarmentType::Pants,
        GarmentType::Jeans,
        GarmentType::Shorts,
        GarmentType::Skirt,
        GarmentType::Leggings,
        GarmentType::Joggers,
        GarmentType::Dress,
        GarmentType::Jumpsuit,
        GarmentType::Romper,
        GarmentType::Suit,
        GarmentType::Sneakers,
        GarmentType::Boots,
        GarmentType::Heels,
        GarmentType::Flats,
        GarmentType::Sandals,
        GarmentType::Loafers,
        GarmentType::FormalShoes,
        GarmentType::Bag,
        GarmentType::Belt,
        GarmentType::Scarf,
        GarmentType::Hat,
        GarmentType::Watch,
        GarmentType::Jewelry,
        GarmentType::Sunglasses,
        GarmentType::Tie,
        GarmentType::Gloves,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tshirt => "tshirt",
            Self::Shirt => "shirt",
            Self::Blouse => "blouse",
            Self::Polo => "polo",
            Self::TankTop => "tank_top",
            Self::Sweater => "sweater",
            Self::Cardigan => "cardigan",
            Self::Hoodie => "hoodie",
            Self::Sweatshirt => "sweatshirt",
            Self::Jacket => "jacket",
            Self::Blazer => "blazer",
            Self::Coat => "coat",
            Self::Vest => "vest",
            Self::Parka => "parka",
            Self::Windbreaker => "windbreaker",
            Self::Pants => "pants",
            Self::Jeans => "jeans",
            Self::Shorts => "shorts",
            Self::Skirt => "skirt",
            Self::Leggings => "leggings",
            Self::Joggers => "joggers",
            Self::Dress => "dress",
            Self::Jumpsuit => "jumpsuit",
            Self::Romper => "romper",
            Self::Suit => "suit",
            Self::Sneakers => "sneakers",
            Self::Boots => "boots",
            Self::Heels => "heels",
            Self::Flats => "flats",
            Self::Sandals => "sandals",
            Self::Loafers => "loafers",
            Self::FormalShoes => "formal_shoes",
            Self::Bag => "bag",
            Self::Belt => "belt",
            Self::Scarf => "scarf",
            Self::Hat => "hat",
            Self::Watch => "watch",
            Self::Jewelry => "jewelry",
            Self::Sunglasses => "sunglasses",
            Self::Tie => "tie",
            Self::Gloves => "gloves",
        }
    }

    /// The coarse category this type is counted under.
    pub fn category(&self) -> Category {
        match self {
            Self::Tshirt
            | Self::Shirt
            | Self::Blouse
            | Self::Polo
            | Self::TankTop
            | Self::Sweater
            | Self::Cardigan
            | Self::Hoodie
            | Self::Sweatshirt => Category::Tops,
            Self::Jacket
            | Self::Blazer
            | Self::Coat
            | Self::Vest
            | Self::Parka
            | Self::Windbreaker => Category::Outerwear,
            Self::Pants
            | Self::Jeans
            | Self::Shorts
            | Self::Skirt
            | Self::Leggings
            | Self::Joggers => Category::Bottoms,
            Self::Dress | Self::Jumpsuit | Self::Romper | Self::Suit => Category::Dresses,
            Self::Sneakers
            | Self::Boots
            | Self::Heels
            | Self::Flats
            | Self::Sandals
            | Self::Loafers
            | Self::FormalShoes => Category::Shoes,
            Self::Bag
            | Self::Belt
            | Self::Scarf
            | Self::Hat
            | Self::Watch
            | Self::Jewelry
            | Self::Sunglasses
            | Self::Tie
            | Self::Gloves => Category::Accessories,
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentType {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        GarmentType::ALL
            .iter()
            .find(|t| t.as_str() == token)
            .copied()
            .ok_or_else(|| WardrobeError::invalid_input(format!("unknown garment type \"{}\"", s)))
    }
}
