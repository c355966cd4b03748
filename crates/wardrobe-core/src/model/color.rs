//! Garment colors.
//!
//! Colors arrive either as palette tokens ("light_blue") or as free-form
//! names ("Dusty Rose"). Both are normalized to a trimmed, lower-cased
//! token so the color breakdown never splits "Black" and "black".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WardrobeError;

/// Palette tokens with their display hex value, when one exists.
const PALETTE: [(&str, Option<&str>); 22] = [
    ("black", Some("#000000")),
    ("white", Some("#FFFFFF")),
    ("gray", Some("#808080")),
    ("navy", Some("#000080")),
    ("blue", Some("#0000FF")),
    ("light_blue", Some("#ADD8E6")),
    ("red", Some("#FF0000")),
    ("burgundy", Some("#800020")),
    ("pink", Some("#FFC0CB")),
    ("orange", Some("#FFA500")),
    ("yellow", Some("#FFFF00")),
    ("green", Some("#008000")),
    ("olive", Some("#808000")),
    ("teal", Some("#008080")),
    ("purple", Some("#800080")),
    ("brown", Some("#8B4513")),
    ("beige", Some("#F5F5DC")),
    ("cream", Some("#FFFDD0")),
    ("gold", Some("#FFD700")),
    ("silver", Some("#C0C0C0")),
    ("multicolor", None),
    ("pattern", None),
];

/// A normalized color name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Normalize and validate a color name.
    pub fn parse(value: &str) -> Result<Self, WardrobeError> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(WardrobeError::invalid_input("color must not be empty"));
        }
        if normalized.chars().any(char::is_control) {
            return Err(WardrobeError::invalid_input(format!(
                "color contains control characters: {:?}",
                value
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display hex value for palette colors.
    pub fn hex(&self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(token, _)| *token == self.0)
            .and_then(|(_, hex)| *hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = WardrobeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_lowercased_and_trimmed() {
        let color = Color::parse("  Black ").unwrap();
        assert_eq!(color.as_str(), "black");
        assert_eq!(color, Color::parse("BLACK").unwrap());
    }

    #[test]
    fn test_free_form_colors_are_kept() {
        let color = Color::parse("Dusty Rose").unwrap();
        assert_eq!(color.as_str(), "dusty rose");
        assert_eq!(color.hex(), None);
    }

    #[test]
    fn test_palette_hex_lookup() {
        assert_eq!(Color::parse("navy").unwrap().hex(), Some("#000080"));
        assert_eq!(Color::parse("pattern").unwrap().hex(), None);
    }

    #[test]
    fn test_empty_color_rejected() {
        assert!(Color::parse("   ").is_err());
    }

    #[test]
    fn test_serde_normalizes_on_deserialize() {
        let color: Color = serde_json::from_str("\"Olive\"").unwrap();
        assert_eq!(color.as_str(), "olive");
        assert!(serde_json::from_str::<Color>("\"\"").is_err());
    }
}
