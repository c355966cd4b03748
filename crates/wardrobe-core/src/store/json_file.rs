//! JSON snapshot file backend.
//!
//! The whole wardrobe lives in one JSON document shaped like
//! [`WardrobeSnapshot`]. It is read through the boundary parser on open and
//! written back atomically on [`JsonFileStore::save`]. Records the parser
//! rejected are carried along untouched so a save never loses data.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::memory::MemoryStore;
use super::traits::WardrobeStore;
use super::types::{GarmentFilter, IntegrityIssue, OutfitFilter};
use crate::error::{Result, WardrobeError};
use crate::ingest::{parse_snapshot, RecordKind, Rejected, WardrobeSnapshot};
use crate::model::{Garment, Outfit};

/// Snapshot-file storage engine.
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    rejected: Vec<Rejected>,
    quarantined: WardrobeSnapshot,
}

impl JsonFileStore {
    /// Create an empty snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::Storage` if the file already exists or cannot be written.
    pub fn create(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(WardrobeError::Storage(format!(
                "Snapshot already exists: {}",
                path.display()
            )));
        }
        let body = serde_json::to_vec_pretty(&WardrobeSnapshot::default())?;
        crate::fs::write_atomic(path, &body)?;
        info!(path = %path.display(), "created empty snapshot");
        Ok(())
    }

    /// Open and parse the snapshot at `path`.
    ///
    /// Malformed records do not fail the open; they are listed by
    /// [`JsonFileStore::rejected`].
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::NotFound` if the file does not exist,
    /// `WardrobeError::Storage` if it cannot be read, and
    /// `WardrobeError::Validation` if it is not a snapshot document.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WardrobeError::not_found(format!(
                "snapshot {}",
                path.display()
            )));
        }
        let raw = fs::read(path)
            .map_err(|e| WardrobeError::Storage(format!("Failed to read snapshot: {}", e)))?;
        let snapshot: WardrobeSnapshot = serde_json::from_slice(&raw).map_err(|e| {
            WardrobeError::validation(format!("{} is not a wardrobe snapshot: {}", path.display(), e))
        })?;

        let original = snapshot.clone();
        let report = parse_snapshot(snapshot);
        let mut quarantined = WardrobeSnapshot::default();
        for rejected in &report.rejected {
            match rejected.kind {
                RecordKind::Garment => quarantined
                    .garments
                    .extend(original.garments.get(rejected.index).cloned()),
                RecordKind::Outfit => quarantined
                    .outfits
                    .extend(original.outfits.get(rejected.index).cloned()),
            }
        }
        if !report.rejected.is_empty() {
            warn!(
                path = %path.display(),
                rejected = report.rejected.len(),
                "snapshot contains records that failed validation"
            );
        }

        let rejected = report.rejected.clone();
        debug!(
            path = %path.display(),
            garments = report.garments.len(),
            outfits = report.outfits.len(),
            "opened snapshot"
        );
        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryStore::from_report(report),
            rejected,
            quarantined,
        })
    }

    /// Write the current state back to disk atomically.
    ///
    /// # Errors
    ///
    /// Returns `WardrobeError::Storage` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let mut snapshot = WardrobeSnapshot::from_domain(self.inner.garments(), self.inner.outfits());
        snapshot
            .garments
            .extend(self.quarantined.garments.iter().cloned());
        snapshot
            .outfits
            .extend(self.quarantined.outfits.iter().cloned());

        let body = serde_json::to_vec_pretty(&snapshot)?;
        crate::fs::write_atomic(&self.path, &body)?;
        debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records that failed validation when the snapshot was opened.
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    /// All garments, archived included.
    pub fn garments(&self) -> &[Garment] {
        self.inner.garments()
    }

    pub fn outfits(&self) -> &[Outfit] {
        self.inner.outfits()
    }
}

impl WardrobeStore for JsonFileStore {
    fn list_garments(&self, filter: &GarmentFilter) -> Result<Vec<Garment>> {
        self.inner.list_garments(filter)
    }

    fn get_garment(&self, id: &Uuid) -> Result<Option<Garment>> {
        self.inner.get_garment(id)
    }

    fn upsert_garment(&mut self, garment: Garment) -> Result<Uuid> {
        self.inner.upsert_garment(garment)
    }

    fn archive_garment(&mut self, id: &Uuid) -> Result<Garment> {
        self.inner.archive_garment(id)
    }

    fn log_garment_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Garment> {
        self.inner.log_garment_wear(id, date)
    }

    fn list_outfits(&self, filter: &OutfitFilter) -> Result<Vec<Outfit>> {
        self.inner.list_outfits(filter)
    }

    fn get_outfit(&self, id: &Uuid) -> Result<Option<Outfit>> {
        self.inner.get_outfit(id)
    }

    fn upsert_outfit(&mut self, outfit: Outfit) -> Result<Uuid> {
        self.inner.upsert_outfit(outfit)
    }

    fn log_outfit_wear(&mut self, id: &Uuid, date: NaiveDate) -> Result<Outfit> {
        self.inner.log_outfit_wear(id, date)
    }

    fn check_integrity(&self) -> Result<Vec<IntegrityIssue>> {
        self.inner.check_integrity()
    }
}
