//! `[cache]` section configuration.
//!
//! Where the cache map is persisted and how long orphaned aggregates live.
//!
//! # Example
//!
//! ```toml
//! [cache]
//! state = ".cssagg/state.json"     # JSON state file (relative to project root, `~` expanded)
//! key = "css_cache_files"          # Key holding the cache map inside the state file
//! stale_file_threshold = 2592000   # Seconds before an aggregate may be deleted by `clean`
//! ```

use crate::aggregate::{CSS_CACHE_KEY, DEFAULT_STALE_FILE_THRESHOLD};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Thresholds below this are allowed but likely delete aggregates that
/// cached pages still link to.
const SHORT_THRESHOLD_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// JSON file backing the state store.
    pub state: PathBuf,

    /// State key of the cache map.
    pub key: String,

    /// Minimum age in seconds before `clean` deletes an aggregate.
    pub stale_file_threshold: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            state: ".cssagg/state.json".into(),
            key: CSS_CACHE_KEY.into(),
            stale_file_threshold: DEFAULT_STALE_FILE_THRESHOLD.as_secs(),
        }
    }
}

impl CacheConfig {
    pub const STATE: FieldPath = FieldPath::new("cache.state");
    pub const KEY: FieldPath = FieldPath::new("cache.key");
    pub const STALE_FILE_THRESHOLD: FieldPath = FieldPath::new("cache.stale_file_threshold");

    pub fn stale_file_threshold(&self) -> Duration {
        Duration::from_secs(self.stale_file_threshold)
    }

    /// Validate cache settings. Call after paths are resolved.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.state.as_os_str().is_empty() {
            diag.error(Self::STATE, "must not be empty");
        } else if self.state.is_dir() {
            diag.error_with_hint(
                Self::STATE,
                format!("`{}` is a directory", self.state.display()),
                "point it at a JSON file, e.g. `.cssagg/state.json`",
            );
        }

        if self.key.trim().is_empty() {
            diag.error(Self::KEY, "must not be empty");
        }

        match self.stale_file_threshold {
            0 => diag.error_with_hint(
                Self::STALE_FILE_THRESHOLD,
                "must be greater than zero",
                "a zero threshold deletes aggregates that pages still link to",
            ),
            secs if secs < SHORT_THRESHOLD_SECS => diag.warn(
                Self::STALE_FILE_THRESHOLD,
                format!("{secs}s is shorter than a day; cached pages may reference deleted aggregates"),
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.cache.state, PathBuf::from(".cssagg/state.json"));
        assert_eq!(config.cache.key, "css_cache_files");
        assert_eq!(config.cache.stale_file_threshold, 2_592_000);
        assert_eq!(
            config.cache.stale_file_threshold(),
            Duration::from_secs(30 * 24 * 60 * 60)
        );
    }

    #[test]
    fn test_custom_cache() {
        let config = test_parse_config(
            r#"
[cache]
state = "/var/lib/cssagg.json"
key = "site_css"
stale_file_threshold = 604800
"#,
        );
        assert_eq!(config.cache.state, PathBuf::from("/var/lib/cssagg.json"));
        assert_eq!(config.cache.key, "site_css");
        assert_eq!(config.cache.stale_file_threshold(), Duration::from_secs(604_800));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let dir = TempDir::new().unwrap();
        let config = CacheConfig {
            state: dir.path().to_path_buf(),
            key: "  ".into(),
            stale_file_threshold: 0,
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                CacheConfig::STATE,
                CacheConfig::KEY,
                CacheConfig::STALE_FILE_THRESHOLD
            ]
        );
    }

    #[test]
    fn test_short_threshold_warns() {
        let config = CacheConfig {
            stale_file_threshold: 60,
            ..CacheConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
