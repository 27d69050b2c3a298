//! Read-time value resolvers.
//!
//! A resolver is a named text transform. The [`ResolverChain`] runs its
//! resolvers in registration order, feeding each one the previous output.
//! Names are the identity: registering a second resolver under a name that
//! is already present is a no-op.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// A named transform applied to values when they are read.
pub trait ValueResolver: Send + Sync {
    /// Stable identity used for deduplication.
    fn name(&self) -> &str;

    /// Transform `value`.
    fn resolve(&self, value: &str) -> String;
}

/// Adapts a closure into a [`ValueResolver`].
pub struct FnResolver<F> {
    name: String,
    func: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> ValueResolver for FnResolver<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, value: &str) -> String {
        (self.func)(value)
    }
}

/// Ordered, append-only list of resolvers.
#[derive(Clone, Default)]
pub struct ResolverChain {
    resolvers: Vec<Arc<dyn ValueResolver>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `resolver` unless one with the same name is registered.
    ///
    /// Returns `true` if it was added.
    pub fn add(&mut self, resolver: Arc<dyn ValueResolver>) -> bool {
        if self.contains(resolver.name()) {
            debug!(resolver = resolver.name(), "resolver already registered");
            return false;
        }
        debug!(resolver = resolver.name(), position = self.resolvers.len(), "resolver registered");
        self.resolvers.push(resolver);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.iter().any(|r| r.name() == name)
    }

    /// Run `value` through every resolver in order.
    pub fn resolve(&self, value: &str) -> String {
        self.resolvers
            .iter()
            .fold(value.to_string(), |acc, resolver| resolver.resolve(&acc))
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Registered names, in application order.
    pub fn names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
