//! Thread-safe property store for propline.
//!
//! [`Properties`] holds a string-to-string map behind a lock, loads entries
//! from `.properties` text, writes them back sorted, and applies a chain of
//! read-time resolvers to looked-up values.
//!
//! # Modules
//!
//! - [`error`] -- [`PropertiesError`] and the crate `Result`
//! - [`traits`] -- [`PropertyStore`] and [`PropertyFile`]
//! - [`properties`] -- The [`Properties`] implementation
//! - [`resolver`] -- [`ValueResolver`], [`FnResolver`], [`ResolverChain`]
//! - [`env`] -- [`EnvResolver`] for `${NAME}` substitution
//! - [`file`] -- Path-based loading and atomic persistence
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use propline_store::{EnvResolver, Properties};
//!
//! let props = Properties::new();
//! props.load(&mut Cursor::new("name = demo\nhome = ${APP_HOME}/data\n")).unwrap();
//! props.add_resolver(Arc::new(EnvResolver::from_map([("APP_HOME", "/srv")])));
//!
//! assert_eq!(props.get("name").unwrap(), "demo");
//! assert_eq!(props.get("home").unwrap(), "/srv/data");
//! assert_eq!(props.get_or_default("missing", "X"), "X");
//! ```

pub mod env;
pub mod error;
pub mod file;
pub mod properties;
pub mod resolver;
pub mod traits;

pub use env::{EnvResolver, ENV_RESOLVER_NAME};
pub use error::{PropertiesError, Result};
pub use properties::Properties;
pub use resolver::{FnResolver, ResolverChain, ValueResolver};
pub use traits::{PropertyFile, PropertyStore};

pub use propline_format::{FormatConfig, LineSeparator, LoadReport};
pub use propline_types::{Pair, Value};
