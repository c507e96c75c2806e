//! `[build]` section configuration.
//!
//! Controls how aggregates are produced and where they are written.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public/css"       # Aggregate directory (relative to project root)
//! minify = true               # Minify each stylesheet before concatenation
//! rebase_urls = true          # Rewrite relative url() references to root-absolute
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory aggregates are dumped to; swept by `clean`.
    pub output: PathBuf,

    /// Minify stylesheets with lightningcss.
    pub minify: bool,

    /// Rewrite relative `url()` references so aggregates work from any directory.
    pub rebase_urls: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public/css".into(),
            minify: true,
            rebase_urls: true,
        }
    }
}

impl BuildConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Validate raw (not yet normalized) build settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "must not be empty");
        } else if self.output.is_absolute() {
            diag.error_with_hint(
                Self::OUTPUT,
                "must be relative to the project root",
                "aggregate locators are root-relative paths",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public/css"));
        assert!(config.build.minify);
        assert!(config.build.rebase_urls);
    }

    #[test]
    fn test_custom_build() {
        let config = test_parse_config(
            r#"
[build]
output = "static/agg"
minify = false
"#,
        );
        assert_eq!(config.build.output, PathBuf::from("static/agg"));
        assert!(!config.build.minify);
        assert!(config.build.rebase_urls);
    }

    #[test]
    fn test_validate_output() {
        let mut diag = ConfigDiagnostics::new();
        BuildConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let empty = BuildConfig {
            output: PathBuf::new(),
            ..BuildConfig::default()
        };
        let absolute = BuildConfig {
            output: "/srv/css".into(),
            ..BuildConfig::default()
        };
        empty.validate(&mut diag);
        absolute.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.field == BuildConfig::OUTPUT));
    }
}
