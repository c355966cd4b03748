//! Storage abstraction layer.
//!
//! This module defines the `WardrobeStore` trait that all backends implement,
//! plus the in-memory and JSON snapshot backends.

pub mod json_file;
pub mod memory;
pub mod resolve;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use resolve::{resolve_garment_id, resolve_outfit_id};
pub use traits::WardrobeStore;
pub use types::{GarmentFilter, IntegrityIssue, OutfitFilter};
