//! Domain model: garments, outfits, and their closed vocabularies.
//!
//! Values in this module are already validated; loosely typed backend rows
//! go through [`crate::ingest`] first.

mod category;
mod color;
mod garment;
mod outfit;
mod tags;

pub use category::{Category, GarmentType};
pub use color::Color;
pub use garment::Garment;
pub(crate) use garment::validate_price;
pub use outfit::Outfit;
pub use tags::{GarmentStatus, Occasion, Season};
