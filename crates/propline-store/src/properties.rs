//! The in-memory [`Properties`] store.
//!
//! Entries live in a `HashMap` behind a `RwLock`. Every mutating call holds
//! the write lock for its whole duration, so mutations are linearizable with
//! respect to each other. Reads take the read lock for a single call only;
//! a `get` followed by a `put` is not atomic.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use propline_format::{FormatConfig, LoadReport, LoadTarget};
use propline_types::{validate_key, Pair, Value};

use crate::error::{PropertiesError, Result};
use crate::resolver::{FnResolver, ResolverChain, ValueResolver};
use crate::traits::{PropertyFile, PropertyStore};

/// A thread-safe string-to-string property map with read-time resolvers.
///
/// Values are coerced to their canonical string form when stored. Resolvers
/// only run in [`get`](Self::get) and [`get_or_default`](Self::get_or_default);
/// enumeration and serialization always see raw values.
pub struct Properties {
    entries: RwLock<HashMap<String, String>>,
    resolvers: RwLock<ResolverChain>,
    config: FormatConfig,
}

impl Properties {
    /// Create an empty store with the default output format.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create an empty store that writes with `config`.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            resolvers: RwLock::new(ResolverChain::new()),
            config,
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Lock access
    // ---------------------------------------------------------------

    // The map holds plain strings; a writer that panicked cannot leave it
    // half-updated, so poisoning is ignored.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------------------------------------------
    // Resolvers
    // ---------------------------------------------------------------

    /// Register a resolver. Returns `false` if its name is already taken.
    pub fn add_resolver(&self, resolver: Arc<dyn ValueResolver>) -> bool {
        self.resolvers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(resolver)
    }

    /// Register a closure as a resolver under `name`.
    pub fn add_resolver_fn<F>(&self, name: impl Into<String>, func: F) -> bool
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.add_resolver(Arc::new(FnResolver::new(name, func)))
    }

    /// Names of the registered resolvers, in application order.
    pub fn resolver_names(&self) -> Vec<String> {
        self.resolvers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Run `value` through the resolver chain.
    pub fn resolve(&self, value: &str) -> String {
        let chain = self
            .resolvers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        chain.resolve(value)
    }

    // ---------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------

    /// Resolved value for `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        let raw = self
            .get_raw(key)
            .ok_or_else(|| PropertiesError::PropertyNotFound {
                key: key.to_string(),
            })?;
        Ok(self.resolve(&raw))
    }

    /// Resolved value for `key`, or the resolved `default`.
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        match self.get_raw(key) {
            Some(raw) => self.resolve(&raw),
            None => self.resolve(default),
        }
    }

    /// Stored value for `key` without running resolvers.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.read_entries().get(key.trim()).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read_entries().contains_key(key.trim())
    }

    pub fn count(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read_entries().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// All raw values, in unspecified order.
    pub fn values(&self) -> Vec<String> {
        self.read_entries().values().cloned().collect()
    }

    /// All entries as pairs, sorted by key, with raw values.
    pub fn pairs(&self) -> Vec<Pair> {
        self.snapshot()
            .into_iter()
            .filter_map(|(key, value)| Pair::new(key, value).ok())
            .collect()
    }

    /// A sorted copy of the raw entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.read_entries()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Store `value` under `key`, returning the previous raw value or `""`.
    ///
    /// Key and value are trimmed, matching what a reload of the stored text
    /// would produce.
    pub fn put(&self, key: &str, value: impl Into<Value>) -> Result<String> {
        validate_key(key)?;
        let value = value.into().to_property_string();
        Ok(self
            .write_entries()
            .insert(key.trim().to_string(), value.trim().to_string())
            .unwrap_or_default())
    }

    /// Store every pair while holding the lock once.
    pub fn put_all<I>(&self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = Pair>,
    {
        let mut entries = self.write_entries();
        for pair in pairs {
            let (key, value) = pair.into_parts();
            entries.insert(key.trim().to_string(), value.to_property_string().trim().to_string());
        }
        Ok(())
    }

    /// Remove `key`, returning its raw value or `""` if it was absent.
    pub fn remove(&self, key: &str) -> String {
        self.write_entries().remove(key.trim()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.write_entries().clear();
    }

    // ---------------------------------------------------------------
    // Text I/O
    // ---------------------------------------------------------------

    /// Merge the entries parsed from `reader` into this store.
    ///
    /// Each assignment takes the lock separately; the load as a whole is
    /// not atomic.
    pub fn load<R: BufRead + ?Sized>(&self, reader: &mut R) -> Result<LoadReport> {
        let mut target = StoreTarget { props: self };
        Ok(propline_format::load(reader, &mut target)?)
    }

    /// Write all entries, sorted, to `writer` using this store's config.
    pub fn store<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        let entries = self.snapshot();
        Ok(propline_format::store(writer, &entries, &self.config)?)
    }
}

/// Routes loader assignments through the store's lock.
struct StoreTarget<'a> {
    props: &'a Properties,
}

impl LoadTarget for StoreTarget<'_> {
    fn current_value(&self, key: &str) -> Option<String> {
        self.props.get_raw(key)
    }

    fn assign(&mut self, key: &str, value: String) {
        self.props.write_entries().insert(key.to_string(), value);
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("entries", &self.count())
            .field("resolvers", &self.resolver_names())
            .field("config", &self.config)
            .finish()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.snapshot();
        write!(f, "({}) {{", entries.len())?;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{key} = {value}]")?;
        }
        f.write_str("}")
    }
}

impl PropertyStore for Properties {
    fn get(&self, key: &str) -> Result<String> {
        Properties::get(self, key)
    }

    fn get_or_default(&self, key: &str, default: &str) -> String {
        Properties::get_or_default(self, key, default)
    }

    fn put(&self, key: &str, value: Value) -> Result<String> {
        Properties::put(self, key, value)
    }

    fn put_all(&self, pairs: Vec<Pair>) -> Result<()> {
        Properties::put_all(self, pairs)
    }

    fn remove(&self, key: &str) -> String {
        Properties::remove(self, key)
    }

    fn clear(&self) {
        Properties::clear(self)
    }

    fn count(&self) -> usize {
        Properties::count(self)
    }

    fn is_empty(&self) -> bool {
        Properties::is_empty(self)
    }

    fn keys(&self) -> Vec<String> {
        Properties::keys(self)
    }

    fn values(&self) -> Vec<String> {
        Properties::values(self)
    }

    fn pairs(&self) -> Vec<Pair> {
        Properties::pairs(self)
    }

    fn contains(&self, key: &str) -> bool {
        Properties::contains(self, key)
    }
}

impl PropertyFile for Properties {
    fn load(&self, reader: &mut dyn BufRead) -> Result<LoadReport> {
        Properties::load(self, reader)
    }

    fn store(&self, writer: &mut dyn Write) -> Result<usize> {
        Properties::store(self, writer)
    }
}
