//! Command handlers, one module per command group.

pub mod check;
pub mod garments;
pub mod init;
pub mod insights;
pub mod misc;
pub mod outfits;
pub mod stats;
