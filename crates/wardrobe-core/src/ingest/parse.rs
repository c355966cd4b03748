//! Record validation: turn backend rows into domain values.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use super::records::{GarmentRecord, OutfitRecord, WardrobeSnapshot};
use crate::error::{Result, WardrobeError};
use crate::model::{
    Category, Color, Garment, GarmentStatus, GarmentType, Occasion, Outfit, Season,
};

fn parse_id(value: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|_| WardrobeError::invalid_input(format!("invalid {} id \"{}\"", what, value)))
}

fn parse_wear_count(value: i64, owner: &str) -> Result<u32> {
    if value < 0 {
        return Err(WardrobeError::validation(format!(
            "wear count for \"{}\" is negative ({})",
            owner, value
        )));
    }
    u32::try_from(value).map_err(|_| {
        WardrobeError::validation(format!("wear count for \"{}\" is too large", owner))
    })
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            WardrobeError::invalid_input(format!(
                "invalid date \"{}\" (expected YYYY-MM-DD or RFC 3339)",
                value
            ))
        })
}

fn parse_timestamp(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| WardrobeError::invalid_input(format!("invalid timestamp \"{}\"", raw))),
        None => Ok(Utc::now()),
    }
}

fn parse_all<T: FromStr<Err = WardrobeError>>(values: &[String]) -> Result<Vec<T>> {
    values.iter().map(|v| v.parse()).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl TryFrom<GarmentRecord> for Garment {
    type Error = WardrobeError;

    fn try_from(record: GarmentRecord) -> Result<Self> {
        let id = parse_id(&record.id, "garment")?;
        let name = non_empty(record.name).unwrap_or_else(|| "Untitled".to_string());

        // The web client stores the fine-grained type in `category`.
        let category = Category::from_str(&record.category)?;
        let garment_type = match record.garment_type.as_deref() {
            Some(raw) => Some(GarmentType::from_str(raw)?),
            None => GarmentType::from_str(&record.category).ok(),
        };

        let primary_color = Color::parse(&record.color)?;
        let secondary_color = match non_empty(record.secondary_color) {
            Some(raw) => Some(Color::parse(&raw)?),
            None => None,
        };

        let wear_count = parse_wear_count(record.times_worn, &name)?;
        let last_worn = match record.last_worn.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_date(raw)?),
            _ => None,
        };

        let status = if record.archived {
            GarmentStatus::Archived
        } else {
            match record.status.as_deref() {
                Some(raw) => GarmentStatus::from_str(raw)?,
                None => GarmentStatus::Active,
            }
        };

        let garment = Garment {
            id,
            name,
            category,
            garment_type,
            primary_color,
            secondary_color,
            brand: non_empty(record.brand),
            material: non_empty(record.material),
            purchase_price: record.purchase_price,
            wear_count,
            last_worn,
            favorite: record.favorite,
            status,
            seasons: parse_all(&record.seasons)?,
            created_at: parse_timestamp(record.created_at.as_deref())?,
        };
        garment.validate()?;
        Ok(garment)
    }
}

impl TryFrom<OutfitRecord> for Outfit {
    type Error = WardrobeError;

    fn try_from(record: OutfitRecord) -> Result<Self> {
        let id = parse_id(&record.id, "outfit")?;
        let items = record
            .items
            .iter()
            .map(|raw| parse_id(raw, "garment"))
            .collect::<Result<Vec<_>>>()?;
        let last_worn = match record.last_worn.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_date(raw)?),
            _ => None,
        };

        let outfit = Outfit {
            id,
            wear_count: parse_wear_count(record.times_worn, &record.name)?,
            name: record.name,
            items,
            occasions: parse_all::<Occasion>(&record.occasions)?,
            seasons: parse_all::<Season>(&record.seasons)?,
            last_worn,
            favorite: record.favorite,
            created_at: parse_timestamp(record.created_at.as_deref())?,
        };
        outfit.validate()?;
        Ok(outfit)
    }
}

/// Which kind of record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Garment,
    Outfit,
}

/// A record that failed validation, kept aside instead of aborting the load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejected {
    pub kind: RecordKind,
    /// Position in the snapshot's list
    pub index: usize,
    pub id: String,
    pub reason: String,
}

/// Outcome of parsing a snapshot.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub garments: Vec<Garment>,
    pub outfits: Vec<Outfit>,
    pub rejected: Vec<Rejected>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse every record in `snapshot`, quarantining the ones that fail.
///
/// Input order is preserved for accepted records.
pub fn parse_snapshot(snapshot: WardrobeSnapshot) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, record) in snapshot.garments.into_iter().enumerate() {
        let id = record.id.clone();
        match Garment::try_from(record) {
            Ok(garment) => report.garments.push(garment),
            Err(err) => {
                warn!(index, id = %id, error = %err, "rejected garment record");
                report.rejected.push(Rejected {
                    kind: RecordKind::Garment,
                    index,
                    id,
                    reason: err.to_string(),
                });
            }
        }
    }

    for (index, record) in snapshot.outfits.into_iter().enumerate() {
        let id = record.id.clone();
        match Outfit::try_from(record) {
            Ok(outfit) => report.outfits.push(outfit),
            Err(err) => {
                warn!(index, id = %id, error = %err, "rejected outfit record");
                report.rejected.push(Rejected {
                    kind: RecordKind::Outfit,
                    index,
                    id,
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        garments = report.garments.len(),
        outfits = report.outfits.len(),
        rejected = report.rejected.len(),
        "parsed snapshot"
    );
    report
}
