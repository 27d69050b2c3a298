//! Error types for property store operations.

use propline_format::FormatError;
use propline_types::PairError;
use thiserror::Error;

/// Errors that can occur during property store operations.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The strict accessor was asked for a key that is not stored.
    #[error("property {key:?} not found")]
    PropertyNotFound { key: String },

    /// The key is empty after trimming.
    #[error("invalid key name: the key cannot be empty")]
    EmptyKey,

    /// Parsing or writing the properties text failed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// I/O error during file-based operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PairError> for PropertiesError {
    fn from(err: PairError) -> Self {
        match err {
            PairError::EmptyKey => PropertiesError::EmptyKey,
        }
    }
}

/// Convenience type alias for property store operations.
pub type Result<T> = std::result::Result<T, PropertiesError>;
