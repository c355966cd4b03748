//! Output formatting helpers for the CLI.
//!
//! Garment and outfit rendering in JSON, table, and plain text form.

mod json;
mod text;

pub use json::{garment_json, garments_json, outfit_json};
pub use text::{garment_row, outfit_row, print_garment, print_outfit};
