//! The analytics engine.
//!
//! Every function here is a pure fold over caller-supplied slices: no I/O,
//! no shared state, full recomputation on each call. Callers re-run the
//! engine on the post-mutation snapshot after logging a wear or editing a
//! garment.

pub mod collection;
pub mod cost;
pub mod insights;
pub mod outfits;
pub mod sustainability;

pub use collection::{summarize_collection, CollectionSummary, GarmentBrief};
pub use cost::{cost_per_wear, round_cents};
pub use insights::{advice_tip, forgotten_items, QuickStats, StylistContext};
pub use outfits::{summarize_outfit, summarize_outfits, OutfitReport, OutfitSummary};
pub use sustainability::{
    sustainability_score, SustainabilityBand, SustainabilityReport, ACTIVE_WEAR_THRESHOLD,
};
