//! Persistent key/value state.
//!
//! The aggregator keeps its fingerprint -> aggregate map under a single key.
//! Stores are injected, so the same engine runs against a JSON file on disk
//! or an in-memory map.

mod cache_map;
mod file;
mod memory;

pub use cache_map::CacheMap;
pub use file::JsonFileState;
pub use memory::MemoryState;

use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;
use thiserror::Error;

/// Durable key/value store.
///
/// Implementations provide no locking: concurrent writers to the same key
/// resolve as last-writer-wins.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// State persistence errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("IO error when accessing state file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("state file `{0}` is not a valid JSON object")]
    Json(PathBuf, #[source] serde_json::Error),
}
