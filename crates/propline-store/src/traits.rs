//! The [`PropertyStore`] and [`PropertyFile`] traits.
//!
//! [`PropertyStore`] is the map-like surface; [`PropertyFile`] adds loading
//! from a line source and writing to a sink. Both are object safe so a
//! store can be handed around as `&dyn PropertyFile`.

use std::io::{BufRead, Write};

use propline_format::LoadReport;
use propline_types::{Pair, Value};

use crate::error::Result;

/// Key/value storage for properties.
///
/// Implementations must be thread-safe. Each mutating call is atomic on its
/// own; sequences of calls (read then write) are not.
pub trait PropertyStore: Send + Sync {
    /// Resolved value for `key`, or `PropertyNotFound`.
    fn get(&self, key: &str) -> Result<String>;

    /// Resolved value for `key`, or `default` run through the same resolvers.
    fn get_or_default(&self, key: &str, default: &str) -> String;

    /// Store the canonical string form of `value`.
    ///
    /// Returns the previous raw value, or `""` if there was none.
    fn put(&self, key: &str, value: Value) -> Result<String>;

    /// Store every pair under a single lock acquisition.
    fn put_all(&self, pairs: Vec<Pair>) -> Result<()>;

    /// Remove `key`, returning its raw value or `""` if absent.
    fn remove(&self, key: &str) -> String;

    /// Remove every entry.
    fn clear(&self);

    /// Number of stored entries.
    fn count(&self) -> usize;

    /// Returns `true` when nothing is stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// All keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// All raw values, in map iteration order.
    fn values(&self) -> Vec<String>;

    /// All entries as pairs with raw values.
    fn pairs(&self) -> Vec<Pair>;

    /// Returns `true` if `key` is stored.
    fn contains(&self, key: &str) -> bool;
}

/// A [`PropertyStore`] that can be read from and written to text.
pub trait PropertyFile: PropertyStore {
    /// Merge the entries parsed from `reader` into the store.
    fn load(&self, reader: &mut dyn BufRead) -> Result<LoadReport>;

    /// Write every entry to `writer`, returning how many were written.
    fn store(&self, writer: &mut dyn Write) -> Result<usize>;
}
