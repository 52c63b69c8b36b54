//! # Configuration
//!
//! A minimal, framework-agnostic configuration store based on a
//! simple string key/value map: `app.set("paginate.default", "10")`,
//! `app.get("paginate.default")`. Applications layer configuration
//! however they like (env vars, files, a tenant-management service);
//! higher-level loaders are intentionally kept out of this crate.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct GenbaConfig {
    values: HashMap<String, String>,
}

impl GenbaConfig {
    /// Create an empty config store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Get a configuration value by key.
    ///
    /// Returns None if the key is not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn snapshot(&self) -> GenbaConfigSnapshot {
        GenbaConfigSnapshot::new(self.values.clone())
    }
}

/// An immutable copy of the config map, cheap to hand to callers
/// that must not observe later mutations.
#[derive(Debug, Clone, Default)]
pub struct GenbaConfigSnapshot {
    map: HashMap<String, String>,
}

impl GenbaConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse::<bool>().ok())
    }
}
