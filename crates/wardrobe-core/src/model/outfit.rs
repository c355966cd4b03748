//! The outfit record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tags::{Occasion, Season};
use crate::error::{Result, WardrobeError};

/// A named, ordered multiset of garment references.
///
/// Outfits hold garment ids only; they never own the garments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: Uuid,

    pub name: String,

    /// Referenced garment ids, in display order. Duplicates are allowed.
    pub items: Vec<Uuid>,

    pub occasions: Vec<Occasion>,

    pub seasons: Vec<Season>,

    pub wear_count: u32,

    pub last_worn: Option<NaiveDate>,

    pub favorite: bool,

    pub created_at: DateTime<Utc>,
}

impl Outfit {
    pub fn new(name: impl Into<String>, items: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
            occasions: Vec::new(),
            seasons: Vec::new(),
            wear_count: 0,
            last_worn: None,
            favorite: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_wears(mut self, wear_count: u32, last_worn: Option<NaiveDate>) -> Self {
        self.wear_count = wear_count;
        self.last_worn = last_worn;
        self
    }

    pub fn with_occasions(mut self, occasions: Vec<Occasion>) -> Self {
        self.occasions = occasions;
        self
    }

    pub fn with_seasons(mut self, seasons: Vec<Season>) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.wear_count == 0 && self.last_worn.is_some() {
            return Err(WardrobeError::validation(format!(
                "outfit \"{}\" has a last-worn date but no recorded wears",
                self.name
            )));
        }
        Ok(())
    }

    /// Record one wear of the outfit itself. Garment wears are fanned out by the store.
    pub fn record_wear(&mut self, date: NaiveDate) {
        self.wear_count = self.wear_count.saturating_add(1);
        self.last_worn = Some(match self.last_worn {
            Some(previous) if previous > date => previous,
            _ => date,
        });
    }
}
