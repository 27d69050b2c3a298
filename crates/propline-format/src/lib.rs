//! Line-oriented `.properties` parsing and serialization.
//!
//! The format is deliberately small:
//!
//! - lines whose first non-blank character is `#` or `!` are comments
//! - blank lines are ignored
//! - `key=value` splits on the first `=`, both sides trimmed
//! - a backslash continues the value onto the next line, where the content
//!   is appended literally
//! - `#` or `!` later in a line also starts a comment; there is no escape
//!
//! Writing emits a `#<timestamp>` header and then the entries sorted by key.
//!
//! # Modules
//!
//! - [`classify`] -- Pure line classification and cleanup helpers
//! - [`extract`] -- [`split_pair`] for a single cleaned line
//! - [`loader`] -- The [`load`] state machine and [`LoadTarget`]
//! - [`writer`] -- [`store`] and [`store_at`]
//! - [`config`] -- [`FormatConfig`] for output layout

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod writer;

pub use config::{FormatConfig, LineSeparator, DEFAULT_TIMESTAMP_FORMAT};
pub use error::{FormatError, FormatResult};
pub use extract::split_pair;
pub use loader::{load, LoadReport, LoadTarget};
pub use writer::{format_header, store, store_at};
