//! Sustainability score: a 0-100 utilization heuristic.
//!
//! The score rewards garments in regular rotation and penalizes garments
//! that were never worn:
//!
//! ```text
//! score = round(active / total * 60 + (1 - dormant / total) * 40)
//! ```

use serde::Serialize;

use crate::model::Garment;

/// Wears needed before a garment counts as active.
pub const ACTIVE_WEAR_THRESHOLD: u32 = 3;

const ACTIVE_WEIGHT: f64 = 60.0;
const DORMANT_WEIGHT: f64 = 40.0;

/// Compute the score. An empty collection scores 0.
pub fn sustainability_score(total: usize, active: usize, dormant: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let total = total as f64;
    let raw = (active as f64 / total) * ACTIVE_WEIGHT
        + (1.0 - dormant as f64 / total) * DORMANT_WEIGHT;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Advisory band for a score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// 40 to 59
    Underused,
    /// Below 40
    Dormant,
}

impl SustainabilityBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Underused,
            _ => Self::Dormant,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent utilization: you wear most of what you own.",
            Self::Good => "Good, with room to improve.",
            Self::Underused => "Many items are underused. Try combining them into new outfits.",
            Self::Dormant => "Most items sit unused. Time to rethink the wardrobe.",
        }
    }
}

/// Score together with the counts it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SustainabilityReport {
    pub score: u8,
    pub band: SustainabilityBand,
    /// Garments worn at least `ACTIVE_WEAR_THRESHOLD` times
    pub active_items: usize,
    /// Garments never worn
    pub dormant_items: usize,
}

impl SustainabilityReport {
    pub fn from_counts(total: usize, active: usize, dormant: usize) -> Self {
        let score = sustainability_score(total, active, dormant);
        Self {
            score,
            band: SustainabilityBand::from_score(score),
            active_items: active,
            dormant_items: dormant,
        }
    }

    /// Count active and dormant garments in `garments` and score them.
    pub fn from_garments<'a, I>(garments: I) -> Self
    where
        I: IntoIterator<Item = &'a Garment>,
    {
        let (mut total, mut active, mut dormant) = (0, 0, 0);
        for garment in garments {
            total += 1;
            if garment.wear_count >= ACTIVE_WEAR_THRESHOLD {
                active += 1;
            }
            if garment.wear_count == 0 {
                dormant += 1;
            }
        }
        Self::from_counts(total, active, dormant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Color};

    #[test]
    fn test_reference_example() {
        assert_eq!(sustainability_score(10, 8, 0), 88);
    }

    #[test]
    fn test_empty_collection_scores_zero() {
        assert_eq!(sustainability_score(0, 0, 0), 0);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(sustainability_score(5, 5, 0), 100);
        assert_eq!(sustainability_score(5, 0, 5), 0);
        assert_eq!(sustainability_score(4, 0, 0), 40);
    }

    #[test]
    fn test_score_is_bounded_for_all_small_inputs() {
        for total in 1..=12 {
            for active in 0..=total {
                for dormant in 0..=(total - active) {
                    let score = sustainability_score(total, active, dormant);
                    assert!(score <= 100, "score {} out of range", score);
                }
            }
        }
    }

    #[test]
    fn test_band_lower_bounds_are_inclusive() {
        assert_eq!(SustainabilityBand::from_score(100), SustainabilityBand::Excellent);
        assert_eq!(SustainabilityBand::from_score(80), SustainabilityBand::Excellent);
        assert_eq!(SustainabilityBand::from_score(79), SustainabilityBand::Good);
        assert_eq!(SustainabilityBand::from_score(60), SustainabilityBand::Good);
        assert_eq!(SustainabilityBand::from_score(59), SustainabilityBand::Underused);
        assert_eq!(SustainabilityBand::from_score(40), SustainabilityBand::Underused);
        assert_eq!(SustainabilityBand::from_score(39), SustainabilityBand::Dormant);
        assert_eq!(SustainabilityBand::from_score(0), SustainabilityBand::Dormant);
    }

    #[test]
    fn test_report_counts_thresholds() {
        let color = Color::parse("black").unwrap();
        let garments = vec![
            Garment::new("a", Category::Tops, color.clone()).with_wears(3, None),
            Garment::new("b", Category::Tops, color.clone()).with_wears(2, None),
            Garment::new("c", Category::Tops, color).with_wears(0, None),
        ];
        let report = SustainabilityReport::from_garments(&garments);
        assert_eq!(report.active_items, 1);
        assert_eq!(report.dormant_items, 1);
        // 1/3*60 + 2/3*40 = 20 + 26.67 = 46.67
        assert_eq!(report.score, 47);
        assert_eq!(report.band, SustainabilityBand::Underused);
    }
}
