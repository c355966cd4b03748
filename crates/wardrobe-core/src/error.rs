//! Error types for wardrobe core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! exit codes and user-facing hints.

use thiserror::Error;

/// Result type alias for wardrobe operations.
pub type Result<T> = std::result::Result<T, WardrobeError>;

/// Core error type for wardrobe operations.
#[derive(Debug, Error)]
pub enum WardrobeError {
    /// A record violates a domain invariant (negative count, non-finite price, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognized token or malformed value at the input boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Snapshot storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl WardrobeError {
    pub fn validation(message: impl Into<String>) -> Self {
        WardrobeError::Validation(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        WardrobeError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        WardrobeError::NotFound(message.into())
    }
}

impl From<std::io::Error> for WardrobeError {
    fn from(err: std::io::Error) -> Self {
        WardrobeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for WardrobeError {
    fn from(err: serde_json::Error) -> Self {
        WardrobeError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = WardrobeError::validation("wear count is negative");
        assert_eq!(err.to_string(), "Validation error: wear count is negative");

        let err = WardrobeError::not_found("garment 1234");
        assert_eq!(err.to_string(), "Not found: garment 1234");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: WardrobeError = io.into();
        assert!(matches!(err, WardrobeError::Storage(_)));
    }
}
