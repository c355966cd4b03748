//! Cost-per-wear calculation.

use crate::error::Result;
use crate::model::validate_price;

/// Round to the nearest cent, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cost per wear for a single garment.
///
/// Returns `Ok(None)` when there is no price or no recorded wear: a garment
/// that was never worn has no meaningful cost per wear, and one without a
/// price has no cost basis. A recorded price of zero is a real price.
///
/// # Errors
///
/// Returns `WardrobeError::Validation` if the price is negative or not finite.
pub fn cost_per_wear(price: Option<f64>, wear_count: u32) -> Result<Option<f64>> {
    let Some(price) = price else {
        return Ok(None);
    };
    validate_price(price, "cost-per-wear input")?;
    if wear_count == 0 {
        return Ok(None);
    }
    Ok(Some(round_cents(price / f64::from(wear_count))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unworn_is_undefined() {
        assert_eq!(cost_per_wear(Some(100.0), 0).unwrap(), None);
    }

    #[test]
    fn test_divides_and_rounds() {
        assert_eq!(cost_per_wear(Some(100.0), 4).unwrap(), Some(25.0));
        assert_eq!(cost_per_wear(Some(100.0), 3).unwrap(), Some(33.33));
        assert_eq!(cost_per_wear(Some(20.0), 3).unwrap(), Some(6.67));
    }

    #[test]
    fn test_missing_price_is_undefined() {
        assert_eq!(cost_per_wear(None, 10).unwrap(), None);
    }

    #[test]
    fn test_zero_price_is_defined() {
        assert_eq!(cost_per_wear(Some(0.0), 5).unwrap(), Some(0.0));
    }

    #[test]
    fn test_invalid_price_fails_fast() {
        assert!(cost_per_wear(Some(-5.0), 2).is_err());
        assert!(cost_per_wear(Some(f64::NAN), 2).is_err());
        assert!(cost_per_wear(Some(f64::INFINITY), 0).is_err());
    }

    #[test]
    fn test_round_cents_halves_away_from_zero() {
        assert_eq!(round_cents(2.5), 2.5);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(12.344), 12.34);
    }
}
