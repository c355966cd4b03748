//! In-memory store backed by ordered vectors.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use super::traits::WardrobeStore;
use super::types::{GarmentFilter, IntegrityIssue, OutfitFilter};
use crate::error::{Result, WardrobeError};
use crate::ingest::ParseReport;
use crate::model::{Garment, Outfit};

/// A wardrobe held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    garments: Vec<Garment>,
    outfits: Vec<Outfit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated collections.
    pub fn from_parts(garments: Vec<Garment>, outfits: Vec<Outfit>) -> Self {
        Self { garments, outfits }
    }

    /// Build a store from the accepted records of a parse; rejected records are dropped.
    pub fn from_report(report: ParseReport) -> Self {
        Self::from_parts(report.garments, report.outfits)
    }

    /// All garments, archived included, in insertion order.
    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    fn garment_index(&self, id: &Uuid) -> Option<usize> {
        self.garments.iter().position(|g| &g.id == id)
    }

    fn outfit_index(&self, id: &Uuid) -> Option<usize> {
        self.outfits.iter().position(|o| &o.id == id)
    }

    fn garment_mut(&mut self, id: &Uuid) -> Result<&mut Garment> {
        self.garments
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| WardrobeError::not_found(format!("garment {}", id)))
    }
}

fn take_limited<T>(items: impl Iterator<Item = T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(limit) => items.take(limit).collect(),
        None => items.collect(),
    }
}

impl WardrobeStore for MemoryStore {
    fn list_garments(&self, filter: &GarmentFilter) -> Result<Vec<Garment>> {
        let matching = self.garments.iter().filter(|g| filter.matches(g)).cloned();
        Ok(take_limited(matching, filter.limit))
    }

    fn get_garment(&self, id: &Uuid) -> Result<Option<Garment>> {
        Ok(self.garment_index(id).map(|i| self.garments[i].clone()))
    }

    fn upsert_garment(&mut self, garment: Garment) -> Result<Uuid> {
        garment.validate()?;
        let id = garment.id;
        match self.garment_index(&id) {
            Some(i) => self.garments[i] = garment,
            None => self.garments.push(garment),
        }
        Ok(id)
    }

    fn archive_garment(&mut self, id: &Uuid) -> Result<Garment> {
        let garment = self.garment_mut(id)?;
        garment.status = crate::model::GarmentStatus::Archived;
        debug!(garment = %id, "archived garment");
        Ok(garment.clone())
    }

    fn log_garment_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Garment> {
        let garment = self.garment_mut(id)?;
        garment.record_wear(date);
        debug!(garment = %id, wears = garment.wear_count, "logged garment wear");
        Ok(garment.clone())
    }

    fn list_outfits(&self, filter: &OutfitFilter) -> Result<Vec<Outfit>> {
        let matching = self.outfits.iter().filter(|o| filter.matches(o)).cloned();
        Ok(take_limited(matching, filter.limit))
    }

    fn get_outfit(&self, id: &Uuid) -> Result<Option<Outfit>> {
        Ok(self.outfit_index(id).map(|i| self.outfits[i].clone()))
    }

    fn upsert_outfit(&mut self, outfit: Outfit) -> Result<Uuid> {
        outfit.validate()?;
        let id = outfit.id;
        match self.outfit_index(&id) {
            Some(i) => self.outfits[i] = outfit,
            None => self.outfits.push(outfit),
        }
        Ok(id)
    }

    fn log_outfit_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Outfit> {
        let outfit_pos = self
            .outfit_index(id)
            .ok_or_else(|| WardrobeError::not_found(format!("outfit {}", id)))?;

        // Resolve every reference before touching anything.
        let mut seen = HashSet::new();
        let mut targets = Vec::new();
        for garment_id in &self.outfits[outfit_pos].items {
            if !seen.insert(*garment_id) {
                continue;
            }
            let pos = self.garment_index(garment_id).ok_or_else(|| {
                WardrobeError::not_found(format!(
                    "garment {} referenced by outfit \"{}\"",
                    garment_id, self.outfits[outfit_pos].name
                ))
            })?;
            targets.push(pos);
        }

        for pos in targets.iter().copied() {
            self.garments[pos].record_wear(date);
        }
        let outfit = &mut self.outfits[outfit_pos];
        outfit.record_wear(date);
        debug!(
            outfit = %id,
            garments = targets.len(),
            wears = outfit.wear_count,
            "logged outfit wear"
        );
        Ok(outfit.clone())
    }

    fn check_integrity(&self) -> Result<Vec<IntegrityIssue>> {
        let mut issues = Vec::new();

        let mut ids = HashSet::new();
        for id in self
            .garments
            .iter()
            .map(|g| g.id)
            .chain(self.outfits.iter().map(|o| o.id))
        {
            if !ids.insert(id) {
                issues.push(IntegrityIssue::DuplicateId { id });
            }
        }

        for garment in &self.garments {
            if let Err(err) = garment.validate() {
                issues.push(IntegrityIssue::Invalid {
                    id: garment.id,
                    reason: err.to_string(),
                });
            }
        }

        let known: HashSet<Uuid> = self.garments.iter().map(|g| g.id).collect();
        for outfit in &self.outfits {
            if let Err(err) = outfit.validate() {
                issues.push(IntegrityIssue::Invalid {
                    id: outfit.id,
                    reason: err.to_string(),
                });
            }
            for garment in &outfit.items {
                if !known.contains(garment) {
                    issues.push(IntegrityIssue::DanglingReference {
                        outfit: outfit.id,
                        garment: *garment,
                    });
                }
            }
        }

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Color, GarmentStatus};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn garment(name: &str) -> Garment {
        Garment::new(name, Category::Tops, Color::parse("grey").unwrap())
    }

    fn store_with_outfit() -> (MemoryStore, Uuid, Uuid, Uuid) {
        let top = garment("top");
        let shoes = Garment::new("shoes", Category::Shoes, Color::parse("black").unwrap());
        let outfit = Outfit::new("Daily", vec![top.id, shoes.id, top.id]);
        let ids = (top.id, shoes.id, outfit.id);
        let store = MemoryStore::from_parts(vec![top, shoes], vec![outfit]);
        (store, ids.0, ids.1, ids.2)
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let mut store = MemoryStore::new();
        let shirt = garment("shirt");
        let id = store.upsert_garment(shirt.clone()).unwrap();
        store.upsert_garment(shirt.with_favorite(true)).unwrap();

        assert_eq!(store.garments().len(), 1);
        assert!(store.get_garment(&id).unwrap().unwrap().favorite);
    }

    #[test]
    fn test_upsert_rejects_invalid_garment() {
        let mut store = MemoryStore::new();
        let bad = garment("bad").with_price(-1.0);
        assert!(store.upsert_garment(bad).is_err());
        assert!(store.garments().is_empty());
    }

    #[test]
    fn test_list_respects_filter_and_limit() {
        let mut store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.upsert_garment(garment(name)).unwrap();
        }
        let listed = store
            .list_garments(&GarmentFilter::new().limit(2))
            .unwrap();
        let names: Vec<_> = listed.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_archive_hides_from_default_listing() {
        let mut store = MemoryStore::new();
        let id = store.upsert_garment(garment("old")).unwrap();
        let archived = store.archive_garment(&id).unwrap();

        assert_eq!(archived.status, GarmentStatus::Archived);
        assert!(store.list_garments(&GarmentFilter::new()).unwrap().is_empty());
        assert!(store.get_garment(&id).unwrap().is_some());
    }

    #[test]
    fn test_log_garment_wear_missing() {
        let mut store = MemoryStore::new();
        let err = store.log_garment_wear(&Uuid::new_v4(), date(1)).unwrap_err();
        assert!(matches!(err, WardrobeError::NotFound(_)));
    }

    #[test]
    fn test_outfit_wear_fans_out_once_per_garment() {
        let (mut store, top, shoes, outfit) = store_with_outfit();
        let worn = store.log_outfit_wear(&outfit, date(5)).unwrap();

        assert_eq!(worn.wear_count, 1);
        assert_eq!(worn.last_worn, Some(date(5)));
        let top = store.get_garment(&top).unwrap().unwrap();
        let shoes = store.get_garment(&shoes).unwrap().unwrap();
        assert_eq!(top.wear_count, 1);
        assert_eq!(shoes.wear_count, 1);
        assert_eq!(shoes.last_worn, Some(date(5)));
    }

    #[test]
    fn test_outfit_wear_with_dangling_reference_changes_nothing() {
        let (mut store, top, _, _) = store_with_outfit();
        let broken = Outfit::new("Broken", vec![top, Uuid::new_v4()]);
        let broken_id = store.upsert_outfit(broken).unwrap();

        let err = store.log_outfit_wear(&broken_id, date(2)).unwrap_err();
        assert!(matches!(err, WardrobeError::NotFound(_)));
        assert_eq!(store.get_garment(&top).unwrap().unwrap().wear_count, 0);
        assert_eq!(store.get_outfit(&broken_id).unwrap().unwrap().wear_count, 0);
    }

    #[test]
    fn test_integrity_reports_dangling_and_duplicates() {
        let top = garment("top");
        let ghost = Uuid::new_v4();
        let outfit = Outfit::new("Ghostly", vec![top.id, ghost]);
        let outfit_id = outfit.id;
        let store = MemoryStore::from_parts(vec![top.clone(), top.clone()], vec![outfit]);

        let issues = store.check_integrity().unwrap();
        assert!(issues.contains(&IntegrityIssue::DuplicateId { id: top.id }));
        assert!(issues.contains(&IntegrityIssue::DanglingReference {
            outfit: outfit_id,
            garment: ghost,
        }));
    }

    #[test]
    fn test_clean_store_has_no_issues() {
        let (store, ..) = store_with_outfit();
        assert!(store.check_integrity().unwrap().is_empty());
    }
}
