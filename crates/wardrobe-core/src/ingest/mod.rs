//! Boundary between backend rows and the domain model.
//!
//! Snapshots are read leniently into [`records`] and then validated one
//! record at a time, so a single malformed row never hides the rest of a
//! collection.

mod parse;
mod records;

pub use parse::{parse_snapshot, ParseReport, RecordKind, Rejected};
pub use records::{GarmentRecord, OutfitRecord, WardrobeSnapshot};
