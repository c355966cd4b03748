//! Query filters and integrity findings for the store layer.

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Category, Color, Garment, Occasion, Outfit, Season};

/// Filter for listing garments.
///
/// Archived garments are hidden unless `include_archived` is set.
#[derive(Debug, Clone, Default)]
pub struct GarmentFilter {
    /// Filter by category
    pub category: Option<Category>,

    /// Matches the primary or secondary color
    pub color: Option<Color>,

    /// Only favorites (or only non-favorites)
    pub favorite: Option<bool>,

    /// Case-insensitive substring of the name or brand
    pub search: Option<String>,

    pub include_archived: bool,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl GarmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_lowercase();
        self.search = (!text.is_empty()).then_some(text);
        self
    }

    pub fn include_archived(mut self, include: bool) -> Self {
        self.include_archived = include;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, garment: &Garment) -> bool {
        if garment.is_archived() && !self.include_archived {
            return false;
        }
        if self.category.is_some_and(|c| c != garment.category) {
            return false;
        }
        if let Some(color) = &self.color {
            let secondary = garment.secondary_color.as_ref() == Some(color);
            if &garment.primary_color != color && !secondary {
                return false;
            }
        }
        if self.favorite.is_some_and(|f| f != garment.favorite) {
            return false;
        }
        if let Some(needle) = &self.search {
            let in_name = garment.name.to_lowercase().contains(needle.as_str());
            let in_brand = garment
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(needle.as_str()));
            if !in_name && !in_brand {
                return false;
            }
        }
        true
    }
}

/// Filter for listing outfits.
#[derive(Debug, Clone, Default)]
pub struct OutfitFilter {
    pub occasion: Option<Occasion>,

    /// Outfits tagged with this season or all-year
    pub season: Option<Season>,

    pub favorite: Option<bool>,

    pub limit: Option<usize>,
}

impl OutfitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, outfit: &Outfit) -> bool {
        if let Some(occasion) = self.occasion {
            if !outfit.occasions.contains(&occasion) {
                return false;
            }
        }
        if let Some(season) = self.season {
            if !outfit.seasons.iter().any(|s| s.covers(season)) {
                return false;
            }
        }
        if self.favorite.is_some_and(|f| f != outfit.favorite) {
            return false;
        }
        true
    }
}

/// A problem found by an integrity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// An outfit references a garment that does not exist
    DanglingReference { outfit: Uuid, garment: Uuid },

    /// Two records share an id
    DuplicateId { id: Uuid },

    /// A record violates a domain invariant
    Invalid { id: Uuid, reason: String },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::DanglingReference { outfit, garment } => {
                write!(f, "outfit {} references missing garment {}", outfit, garment)
            }
            IntegrityIssue::DuplicateId { id } => write!(f, "duplicate id {}", id),
            IntegrityIssue::Invalid { id, reason } => write!(f, "{}: {}", id, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Garment {
        Garment::new("Oxford shirt", Category::Tops, Color::parse("blue").unwrap())
            .with_brand("Uniqlo")
    }

    #[test]
    fn test_garment_filter_builder() {
        let filter = GarmentFilter::new()
            .category(Category::Tops)
            .favorite(true)
            .search("  Oxford ")
            .limit(5);

        assert_eq!(filter.category, Some(Category::Tops));
        assert_eq!(filter.favorite, Some(true));
        assert_eq!(filter.search.as_deref(), Some("oxford"));
        assert_eq!(filter.limit, Some(5));
        assert!(!filter.include_archived);
    }

    #[test]
    fn test_search_matches_name_or_brand() {
        let garment = shirt();
        assert!(GarmentFilter::new().search("OXF").matches(&garment));
        assert!(GarmentFilter::new().search("uniqlo").matches(&garment));
        assert!(!GarmentFilter::new().search("linen").matches(&garment));
    }

    #[test]
    fn test_color_matches_secondary() {
        let garment = shirt().with_secondary_color(Color::parse("white").unwrap());
        let white = GarmentFilter::new().color(Color::parse("White").unwrap());
        let red = GarmentFilter::new().color(Color::parse("red").unwrap());
        assert!(white.matches(&garment));
        assert!(!red.matches(&garment));
    }

    #[test]
    fn test_archived_hidden_by_default() {
        let garment = shirt().with_status(crate::model::GarmentStatus::Archived);
        assert!(!GarmentFilter::new().matches(&garment));
        assert!(GarmentFilter::new().include_archived(true).matches(&garment));
    }

    #[test]
    fn test_outfit_filter_season_and_occasion() {
        let outfit = Outfit::new("Layers", vec![])
            .with_occasions(vec![Occasion::Work])
            .with_seasons(vec![Season::AllYear]);

        assert!(OutfitFilter::new().season(Season::Winter).matches(&outfit));
        assert!(OutfitFilter::new().occasion(Occasion::Work).matches(&outfit));
        assert!(!OutfitFilter::new().occasion(Occasion::Party).matches(&outfit));
        assert!(!OutfitFilter::new().favorite(true).matches(&outfit));
    }
}
