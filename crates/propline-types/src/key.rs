//! Key validation.
//!
//! A key is valid when it still has content after surrounding whitespace is
//! trimmed. No other character rules apply: the line format trims both sides
//! of the delimiter, so anything else survives a write/read cycle.

use crate::error::{PairError, Result};

/// Validate a key, returning `Ok(())` if it is usable.
///
/// # Examples
///
/// ```
/// use propline_types::validate_key;
///
/// assert!(validate_key("server.port").is_ok());
/// assert!(validate_key("").is_err());
/// assert!(validate_key("   ").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(PairError::EmptyKey);
    }
    Ok(())
}

/// Returns `true` if `key` passes [`validate_key`].
pub fn is_valid_key(key: &str) -> bool {
    validate_key(key).is_ok()
}
