//! Closed tag vocabularies: seasons, occasions, and garment status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WardrobeError;

fn parse_token<T: Copy>(
    all: &[T],
    as_str: impl Fn(&T) -> &'static str,
    kind: &str,
    s: &str,
) -> Result<T, WardrobeError> {
    let token = s.trim().to_lowercase().replace(['-', ' '], "_");
    all.iter()
        .find(|value| as_str(*value) == token)
        .copied()
        .ok_or_else(|| WardrobeError::invalid_input(format!("unknown {} \"{}\"", kind, s)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllYear,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::AllYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
            Self::AllYear => "all_year",
        }
    }

    /// Whether a garment tagged with `self` is suitable in `season`.
    pub fn covers(&self, season: Season) -> bool {
        *self == season || *self == Season::AllYear
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Season::ALL, Season::as_str, "season", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Everyday,
    Work,
    Meeting,
    Date,
    Party,
    Wedding,
    FormalEvent,
    Interview,
    Sport,
    Outdoor,
    Beach,
    Travel,
    CasualOuting,
    Dinner,
    Brunch,
}

impl Occasion {
    pub const ALL: [Occasion; 15] = [
        Occasion::Everyday,
        Occasion::Work,
        Occasion::Meeting,
        Occasion::Date,
        Occasion::Party,
        Occasion::Wedding,
        Occasion::FormalEvent,
        Occasion::Interview,
        Occasion::Sport,
        Occasion::Outdoor,
        Occasion::Beach,
        Occasion::Travel,
        Occasion::CasualOuting,
        Occasion::Dinner,
        Occasion::Brunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Everyday => "everyday",
            Self::Work => "work",
            Self::Meeting => "meeting",
            Self::Date => "date",
            Self::Party => "party",
            Self::Wedding => "wedding",
            Self::FormalEvent => "formal_event",
            Self::Interview => "interview",
            Self::Sport => "sport",
            Self::Outdoor => "outdoor",
            Self::Beach => "beach",
            Self::Travel => "travel",
            Self::CasualOuting => "casual_outing",
            Self::Dinner => "dinner",
            Self::Brunch => "brunch",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Occasion::ALL, Occasion::as_str, "occasion", s)
    }
}

/// Lifecycle status of a garment. Archived garments are soft-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentStatus {
    #[default]
    Active,
    Inactive,
    Damaged,
    Donation,
    Sell,
    Archived,
}

impl GarmentStatus {
    pub const ALL: [GarmentStatus; 6] = [
        GarmentStatus::Active,
        GarmentStatus::Inactive,
        GarmentStatus::Damaged,
        GarmentStatus::Donation,
        GarmentStatus::Sell,
        GarmentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Damaged => "damaged",
            Self::Donation => "donation",
            Self::Sell => "sell",
            Self::Archived => "archived",
        }
    }

    pub fn is_archived(&self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl fmt::Display for GarmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentStatus {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&GarmentStatus::ALL, GarmentStatus::as_str, "status", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_normalizes_separators() {
        assert_eq!("all-year".parse::<Season>().unwrap(), Season::AllYear);
        assert_eq!("All Year".parse::<Season>().unwrap(), Season::AllYear);
        assert_eq!("WINTER".parse::<Season>().unwrap(), Season::Winter);
    }

    #[test]
    fn test_all_year_covers_every_season() {
        assert!(Season::AllYear.covers(Season::Summer));
        assert!(Season::Winter.covers(Season::Winter));
        assert!(!Season::Winter.covers(Season::Summer));
    }

    #[test]
    fn test_occasion_round_trip_tokens() {
        for occasion in Occasion::ALL {
            assert_eq!(occasion.as_str().parse::<Occasion>().unwrap(), occasion);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "lost".parse::<GarmentStatus>().unwrap_err();
        assert!(err.to_string().contains("unknown status"));
    }

    #[test]
    fn test_status_default_is_active() {
        assert_eq!(GarmentStatus::default(), GarmentStatus::Active);
        assert!(!GarmentStatus::Sell.is_archived());
        assert!(GarmentStatus::Archived.is_archived());
    }
}
