//! Parsing helpers for dates, filter tokens, and record IDs.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

use wardrobe_core::model::{Garment, Outfit};
use wardrobe_core::store::{resolve_garment_id, resolve_outfit_id};
use wardrobe_core::{WardrobeError, WardrobeStore};

use crate::errors::CliError;

/// Parse the `--date` of a wear, defaulting to today in local time.
pub fn parse_wear_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    let Some(raw) = value else {
        return Ok(Local::now().date_naive());
    };
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.date_naive());
    }
    Err(CliError::invalid_input(format!(
        "Invalid date (expected YYYY-MM-DD): {}",
        raw
    ))
    .into())
}

/// Parse an optional filter token (category, occasion, season).
pub fn parse_token<T>(value: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = WardrobeError>,
{
    match value {
        Some(raw) => Ok(Some(raw.parse::<T>()?)),
        None => Ok(None),
    }
}

/// Parse every token of a repeatable flag.
pub fn parse_tokens<T>(values: &[String]) -> anyhow::Result<Vec<T>>
where
    T: FromStr<Err = WardrobeError>,
{
    Ok(values
        .iter()
        .map(|raw| raw.parse::<T>())
        .collect::<Result<Vec<_>, _>>()?)
}

fn not_found_hint(err: WardrobeError, what: &str, hint: &str) -> anyhow::Error {
    match err {
        WardrobeError::NotFound(_) => {
            CliError::not_found(format!("{} not found", what), hint.to_string()).into()
        }
        other => other.into(),
    }
}

/// Resolve a garment ID or prefix and load the garment.
pub fn require_garment<S: WardrobeStore + ?Sized>(store: &S, input: &str) -> anyhow::Result<Garment> {
    const HINT: &str = "Hint: Run `wardrobe garments list --archived` to find garment IDs.";
    let id: Uuid = resolve_garment_id(store, input).map_err(|e| not_found_hint(e, "Garment", HINT))?;
    store
        .get_garment(&id)?
        .ok_or_else(|| CliError::not_found("Garment not found", HINT).into())
}

/// Resolve an outfit ID or prefix and load the outfit.
pub fn require_outfit<S: WardrobeStore + ?Sized>(store: &S, input: &str) -> anyhow::Result<Outfit> {
    const HINT: &str = "Hint: Run `wardrobe outfits list` to find outfit IDs.";
    let id: Uuid = resolve_outfit_id(store, input).map_err(|e| not_found_hint(e, "Outfit", HINT))?;
    store
        .get_outfit(&id)?
        .ok_or_else(|| CliError::not_found("Outfit not found", HINT).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::model::{Category, Color, Season};
    use wardrobe_core::store::MemoryStore;

    #[test]
    fn test_parse_wear_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse_wear_date(Some("2024-05-01")).unwrap(), expected);
        assert_eq!(
            parse_wear_date(Some("2024-05-01T09:30:00Z")).unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_wear_date_defaults_to_today() {
        assert_eq!(parse_wear_date(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_wear_date_rejects_garbage() {
        let err = parse_wear_date(Some("yesterday")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_parse_token() {
        let category: Option<Category> = parse_token(Some("jeans")).unwrap();
        assert_eq!(category, Some(Category::Bottoms));
        let season: Option<Season> = parse_token(None).unwrap();
        assert!(season.is_none());
        assert!(parse_token::<Category>(Some("capes")).is_err());
    }

    #[test]
    fn test_parse_tokens_fails_on_first_bad_token() {
        let seasons: Vec<Season> =
            parse_tokens(&["Summer".to_string(), "all_year".to_string()]).unwrap();
        assert_eq!(seasons, vec![Season::Summer, Season::AllYear]);
        assert!(parse_tokens::<Season>(&["summer".to_string(), "monsoon".to_string()]).is_err());
        assert!(parse_tokens::<Season>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_require_garment_by_prefix_and_missing() {
        let garment = Garment::new("Parka", Category::Outerwear, Color::parse("olive").unwrap());
        let prefix = garment.id.to_string()[..8].to_string();
        let store = MemoryStore::from_parts(vec![garment.clone()], vec![]);

        assert_eq!(require_garment(&store, &prefix).unwrap().id, garment.id);

        let missing = Uuid::new_v4().to_string();
        let err = require_garment(&store, &missing).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), crate::constants::exit_codes::NOT_FOUND);
    }
}
