//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use wardrobe_core::WardrobeError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, snapshot, garment, outfit)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Snapshot failed its integrity check
    IntegrityFailed { problems: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed { problems } => {
                write!(f, "Integrity check failed ({} problem(s))", problems)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed { .. } => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Pick the exit code for an error bubbled up to `main`.
///
/// Typed CLI errors win; core errors are mapped by kind; anything else is a
/// general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<WardrobeError>() {
        Some(WardrobeError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(WardrobeError::InvalidInput(_)) | Some(WardrobeError::Validation(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => exit_codes::GENERAL,
    }
}
