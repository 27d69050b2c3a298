//! The key/value [`Pair`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PairError, Result};
use crate::key::validate_key;
use crate::value::Value;

/// A single property entry: a validated key and its value.
///
/// The key is fixed at construction and guaranteed non-empty after trimming.
/// The value can be replaced in place with [`Pair::set_value`], which is
/// what makes a `Pair` usable as a mutable pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    key: String,
    value: Value,
}

impl Pair {
    /// Create a pair, rejecting keys that are empty after trimming.
    ///
    /// An empty key is a caller bug and fails immediately with
    /// [`PairError::EmptyKey`]; the key is never trimmed or otherwise
    /// adjusted to make it pass.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The value in its canonical stored form.
    pub fn value_str(&self) -> String {
        self.value.to_property_string()
    }

    /// Replace the value, returning the previous one.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Split into `(key, value)`.
    pub fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} = {}]", self.key, self.value)
    }
}

impl<K, V> TryFrom<(K, V)> for Pair
where
    K: Into<String>,
    V: Into<Value>,
{
    type Error = PairError;

    fn try_from((key, value): (K, V)) -> Result<Self> {
        Pair::new(key, value)
    }
}
