//! # Error Types
//!
//! This module defines error types used throughout the emoji-styles library.
//!
//! Missing assets are not errors: they degrade to the system font. The
//! variants here cover malformed inputs and I/O that has no fallback.

use thiserror::Error;

/// Main error type for emoji-styles operations
#[derive(Debug, Error)]
pub enum EmojiError {
    /// No style with this key in the catalog
    #[error("Unknown emoji style: {0}")]
    StyleNotFound(String),

    /// Style record lacks a field required for its kind
    #[error("Invalid emoji style '{key}': {reason}")]
    InvalidStyle { key: String, reason: String },

    /// Catalog description could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EmojiError {
    fn from(err: serde_json::Error) -> Self {
        EmojiError::Catalog(err.to_string())
    }
}
