//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, snapshot, garment, outfit).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, or a record that fails validation.
    pub const INVALID_INPUT: i32 = 4;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Number of items shown by `wardrobe forgotten` when neither flag nor config sets it.
pub const DEFAULT_FORGOTTEN_LIMIT: usize = 5;

/// Currency symbol used when the config does not set one.
pub const DEFAULT_CURRENCY: &str = "$";

/// Default row cap for `garments list`.
pub const DEFAULT_LIST_LIMIT: usize = 50;
