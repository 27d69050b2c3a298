//! Error types for the format crate.

use propline_types::PairError;

/// Errors that can occur while parsing or writing properties text.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The line has no `=` delimiter.
    #[error("invalid data pair: {line:?}")]
    InvalidPair { line: String },

    /// The key is empty after trimming.
    #[error("key cannot be empty")]
    EmptyKey,

    /// The configured timestamp layout could not be rendered.
    #[error("invalid timestamp format: {0:?}")]
    InvalidTimestampFormat(String),

    /// A configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The line source or sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PairError> for FormatError {
    fn from(err: PairError) -> Self {
        match err {
            PairError::EmptyKey => FormatError::EmptyKey,
        }
    }
}

/// Convenience alias for format results.
pub type FormatResult<T> = Result<T, FormatError>;
