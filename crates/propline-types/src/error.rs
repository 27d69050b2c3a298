use thiserror::Error;

/// Errors produced when constructing or validating pairs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairError {
    #[error("invalid key name: the key cannot be empty")]
    EmptyKey,
}

/// Convenience type alias for pair operations.
pub type Result<T> = std::result::Result<T, PairError>;
