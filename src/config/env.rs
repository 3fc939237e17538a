//! Environment lookup abstraction.
//!
//! The loader never calls `std::env` directly. It asks an
//! [`EnvironmentReader`], so tests and embedders can hand it a synthetic
//! environment without touching process state.

use std::collections::HashMap;

/// A read-only key/value view of an environment.
pub trait EnvironmentReader {
    /// Return the value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: EnvironmentReader + ?Sized> EnvironmentReader for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// The real process environment.
///
/// Values that are not valid Unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentReader for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment backed by a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvironmentReader for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
