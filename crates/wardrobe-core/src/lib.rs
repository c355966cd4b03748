//! # Wardrobe Core
//!
//! Core library for Wardrobe - a personal wardrobe tracker with cost-per-wear
//! analytics.
//!
//! This crate provides the domain model, boundary parsing, storage
//! abstractions, and the analytics engine independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Garments, outfits, and their closed vocabularies
//! - **ingest**: Backend rows and their validation into the model
//! - **analytics**: Cost-per-wear, collection, sustainability, and outfit figures
//! - **store**: Store trait, in-memory and JSON snapshot backends

pub mod analytics;
pub mod error;
pub mod fs;
pub mod ingest;
pub mod model;
pub mod store;

pub use error::{Result, WardrobeError};
pub use store::WardrobeStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
