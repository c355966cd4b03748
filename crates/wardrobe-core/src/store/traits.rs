//! Store trait definition.
//!
//! The `WardrobeStore` trait is the injectable replacement for global
//! application state. Backends own the garment and outfit collections;
//! the analytics engine only ever sees the slices they hand out.

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{GarmentFilter, IntegrityIssue, OutfitFilter};
use crate::error::Result;
use crate::model::{Garment, Outfit};

/// Storage interface for a user's wardrobe.
///
/// All implementations must ensure:
/// - Listing preserves insertion order
/// - Records handed in are validated before they are stored
/// - A failed mutation leaves the store unchanged
pub trait WardrobeStore: Send + Sync {
    // --- Garment operations ---

    /// List garments matching the filter, in insertion order.
    fn list_garments(&self, filter: &GarmentFilter) -> Result<Vec<Garment>>;

    /// Get a garment by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(garment))` if found, `Ok(None)` if not found.
    /// Archived garments are still returned.
    fn get_garment(&self, id: &Uuid) -> Result<Option<Garment>>;

    /// Insert a garment, or replace the one with the same ID in place.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::Validation` if the garment violates its invariants.
    fn upsert_garment(&mut self, garment: Garment) -> Result<Uuid>;

    /// Soft-delete a garment by setting its status to archived.
    ///
    /// Outfits keep their references; archived garments still resolve for
    /// outfit cost figures but drop out of collection statistics.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::NotFound` if no garment has this ID.
    fn archive_garment(&mut self, id: &Uuid) -> Result<Garment>;

    /// Record one wear of a garment on `date`.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::NotFound` if no garment has this ID.
    fn log_garment_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Garment>;

    // --- Outfit operations ---

    /// List outfits matching the filter, in insertion order.
    fn list_outfits(&self, filter: &OutfitFilter) -> Result<Vec<Outfit>>;

    /// Get an outfit by ID.
    fn get_outfit(&self, id: &Uuid) -> Result<Option<Outfit>>;

    /// Insert an outfit, or replace the one with the same ID in place.
    ///
    /// Unresolved garment references are allowed here; they surface in
    /// outfit summaries and in [`WardrobeStore::check_integrity`].
    fn upsert_outfit(&mut self, outfit: Outfit) -> Result<Uuid>;

    /// Record one wear of an outfit on `date`.
    ///
    /// Every distinct garment the outfit references gains one wear as well.
    /// A garment listed twice in the outfit is still counted once.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::NotFound` if the outfit does not exist or if
    /// any referenced garment is missing. Nothing is modified in that case.
    fn log_outfit_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Outfit>;

    // --- Maintenance operations ---

    /// Check store integrity.
    ///
    /// Verifies:
    /// - Every outfit reference resolves to a garment
    /// - IDs are unique
    /// - Every record satisfies its invariants
    ///
    /// # Returns
    ///
    /// Returns the problems found; an empty list means the store is consistent.
    fn check_integrity(&self) -> Result<Vec<IntegrityIssue>>;
}
