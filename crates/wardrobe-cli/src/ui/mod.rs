//! UI primitives for the Wardrobe CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, styles, symbols
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Money, dates, short IDs
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, table, hint};
//!
//! let ui = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii)?;
//!
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ui, "garments list", None));
//! println!("{}", table(&ui, &columns, &rows));
//! println!("{}", hint(&ui, "wardrobe garments show <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, bullet, header, header_with_context, hint, kv, print, receipt,
    section, simple_table, table, Column,
};

pub use format::{
    format_date, format_money, format_optional_money, format_wears, join_labels, short_id,
    truncate,
};
