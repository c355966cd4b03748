//! Input and parsing helper functions for the CLI.

mod parsing;

pub use parsing::{parse_token, parse_tokens, parse_wear_date, require_garment, require_outfit};
