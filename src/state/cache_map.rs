//! Fingerprint -> aggregate locator map.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::StateStore;

/// Which aggregate was generated for which ordered source list.
///
/// Keys are hex fingerprints, values are aggregate locators. Stored as one
/// JSON object under a single state key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheMap {
    entries: BTreeMap<String, String>,
}

impl CacheMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the map stored under `key`; `None` when the key is absent.
    pub fn load(store: &dyn StateStore, key: &str) -> Result<Option<Self>> {
        let Some(value) = store.get(key)? else {
            return Ok(None);
        };
        let map = serde_json::from_value(value)
            .with_context(|| format!("cache map under `{key}` is malformed"))?;
        Ok(Some(map))
    }

    /// Replace the value under `key` with this whole map.
    pub fn save(&self, store: &dyn StateStore, key: &str) -> Result<()> {
        store.set(key, serde_json::to_value(self)?)
    }

    pub fn get(&self, fingerprint: &str) -> Option<&str> {
        self.entries.get(fingerprint).map(String::as_str)
    }

    /// Record an aggregate; returns the locator it replaced, if any.
    pub fn insert(&mut self, fingerprint: impl Into<String>, locator: impl Into<String>) -> Option<String> {
        self.entries.insert(fingerprint.into(), locator.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
