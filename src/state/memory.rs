//! In-memory state store.

use anyhow::Result;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::Value;

use super::StateStore;

/// Process-local store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryState {
    entries: Mutex<FxHashMap<String, Value>>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl StateStore for MemoryState {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_state_get_set_delete() {
        let state = MemoryState::new();
        assert!(state.get("k").unwrap().is_none());

        state.set("k", json!({"a": "b"})).unwrap();
        assert_eq!(state.get("k").unwrap(), Some(json!({"a": "b"})));
        assert_eq!(state.len(), 1);

        state.delete("k").unwrap();
        assert!(state.get("k").unwrap().is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let state = MemoryState::new();
        assert!(state.delete("missing").is_ok());
    }
}
