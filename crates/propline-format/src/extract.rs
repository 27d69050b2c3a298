//! Splitting a cleaned line into its key and value.

use propline_types::validate_key;

use crate::error::{FormatError, FormatResult};

/// Delimiter between key and value.
pub const PAIR_DELIMITER: char = '=';

/// Split `line` on its first `=` into a trimmed key and value.
///
/// An empty value comes back as `None`, the absence marker, which stores as
/// the empty string. Later `=` characters belong to the value.
///
/// # Errors
///
/// - [`FormatError::InvalidPair`] if there is no `=`
/// - [`FormatError::EmptyKey`] if nothing but whitespace precedes it
pub fn split_pair(line: &str) -> FormatResult<(&str, Option<&str>)> {
    let line = line.trim();
    let (key, value) = line
        .split_once(PAIR_DELIMITER)
        .ok_or_else(|| FormatError::InvalidPair {
            line: line.to_string(),
        })?;

    let key = key.trim();
    validate_key(key)?;

    let value = value.trim();
    Ok((key, (!value.is_empty()).then_some(value)))
}
