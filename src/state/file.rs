//! JSON file state store.
//!
//! The whole store is one JSON object. Every mutation re-reads the file,
//! applies the change and replaces the file atomically, so a crash never
//! leaves a truncated state file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Map, Value};

use super::{StateError, StateStore};
use crate::debug;
use crate::utils::fs::write_atomic;

/// State persisted as a JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileState {
    path: PathBuf,
}

impl JsonFileState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all entries. A missing file is an empty store.
    fn load(&self) -> Result<Map<String, Value>, StateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StateError::Io(self.path.clone(), e)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| StateError::Json(self.path.clone(), e))
    }

    fn store(&self, entries: &Map<String, Value>) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StateError::Json(self.path.clone(), e))?;
        write_atomic(&self.path, json.as_bytes()).map_err(|e| StateError::Io(self.path.clone(), e))
    }
}

impl StateStore for JsonFileState {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.store(&entries)?;
        debug!("state"; "wrote `{}` to {}", key, self.path.display());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
            debug!("state"; "deleted `{}` from {}", key, self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let state = JsonFileState::new(dir.path().join("state.json"));
        assert!(state.get("css").unwrap().is_none());
    }

    #[test]
    fn test_set_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cssagg/state.json");

        JsonFileState::new(&path)
            .set("css", json!({"abc": "css/css_1.css"}))
            .unwrap();

        let reopened = JsonFileState::new(&path);
        assert_eq!(
            reopened.get("css").unwrap(),
            Some(json!({"abc": "css/css_1.css"}))
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let state = JsonFileState::new(dir.path().join("state.json"));

        state.set("css", json!(1)).unwrap();
        state.set("js", json!(2)).unwrap();
        state.delete("css").unwrap();

        assert!(state.get("css").unwrap().is_none());
        assert_eq!(state.get("js").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileState::new(&path).get("css").unwrap_err();
        assert!(err.to_string().contains("not a valid JSON object"));
    }
}
