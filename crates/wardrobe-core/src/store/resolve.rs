//! Resolve user-typed IDs (full UUID or unique prefix).

use uuid::Uuid;

use super::traits::WardrobeStore;
use super::types::{GarmentFilter, OutfitFilter};
use crate::error::{Result, WardrobeError};

/// Shortest prefix accepted, to keep accidental matches unlikely.
pub const MIN_PREFIX_LEN: usize = 4;

fn resolve_prefix(ids: impl IntoIterator<Item = Uuid>, input: &str, kind: &str) -> Result<Uuid> {
    let needle = input.trim().to_lowercase();
    if let Ok(full) = Uuid::parse_str(&needle) {
        return ids
            .into_iter()
            .find(|id| *id == full)
            .ok_or_else(|| WardrobeError::not_found(format!("{} {}", kind, full)));
    }
    if needle.len() < MIN_PREFIX_LEN || !needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(WardrobeError::invalid_input(format!(
            "\"{}\" is not a {} ID or an ID prefix of at least {} hex digits",
            input, kind, MIN_PREFIX_LEN
        )));
    }

    let mut matches = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(WardrobeError::not_found(format!(
            "no {} ID starts with \"{}\"",
            kind, needle
        ))),
        (Some(_), Some(_)) => Err(WardrobeError::invalid_input(format!(
            "{} ID prefix \"{}\" is ambiguous",
            kind, needle
        ))),
    }
}

/// Resolve a garment ID or unique prefix, archived garments included.
///
/// # Errors
///
/// Returns `WardrobeError::NotFound` if nothing matches and
/// `WardrobeError::InvalidInput` if the input is malformed or ambiguous.
pub fn resolve_garment_id<S: WardrobeStore + ?Sized>(store: &S, input: &str) -> Result<Uuid> {
    let garments = store.list_garments(&GarmentFilter::new().include_archived(true))?;
    resolve_prefix(garments.iter().map(|g| g.id), input, "garment")
}

/// Resolve an outfit ID or unique prefix.
pub fn resolve_outfit_id<S: WardrobeStore + ?Sized>(store: &S, input: &str) -> Result<Uuid> {
    let outfits = store.list_outfits(&OutfitFilter::new())?;
    resolve_prefix(outfits.iter().map(|o| o.id), input, "outfit")
}
