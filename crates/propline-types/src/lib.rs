//! Foundation types for propline.
//!
//! This crate provides the key/value model shared by every other propline
//! crate: the [`Pair`] entry, the [`Value`] coercion rules that turn typed
//! input into the string stored on disk, and key validation.
//!
//! # Key Types
//!
//! - [`Pair`] -- A validated key with a replaceable value
//! - [`Value`] -- Typed input with canonical stringification
//! - [`PairError`] -- Validation failures on pair construction

pub mod error;
pub mod key;
pub mod pair;
pub mod value;

pub use error::{PairError, Result};
pub use key::{is_valid_key, validate_key};
pub use pair::Pair;
pub use value::Value;
