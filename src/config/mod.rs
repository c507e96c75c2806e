//! Project configuration for `cssagg.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── cache      # [cache]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config discovery, path resolution
//! └── mod.rs         # Config (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[build]` | Aggregate directory, minification, url rebasing  |
//! | `[cache]` | State file, cache map key, stale threshold       |
//!
//! The file is optional: without one every field takes its default and the
//! current directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_path};

pub use section::{BuildConfig, CacheConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::aggregate::CacheSettings;
use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing cssagg.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Aggregate output settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Cache map persistence settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration for `cli`, searching upward from cwd for the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching upward from `start`.
    fn load_from(cli: &Cli, start: &Path) -> Result<Self> {
        let (mut config, root) = match find_config_file(&cli.config, start) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = crate::utils::path::normalize_path(&path);
                (config, root)
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                (Self::default(), start.to_path_buf())
            }
        };

        // Validate raw paths before normalization
        config.validate_paths()?;

        config.normalize_paths(&root);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Engine settings derived from `[build]` and `[cache]`.
    ///
    /// `artifact_dir` stays root-relative: the storage resolves it.
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            key: self.cache.key.clone(),
            artifact_dir: self.build.output.clone(),
            stale_file_threshold: self.cache.stale_file_threshold(),
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Optimize { args } => {
                if args.no_minify {
                    self.build.minify = false;
                }
            }
            Commands::List { .. } => {}
            Commands::Clean { threshold } => {
                Self::update_option(&mut self.cache.stale_file_threshold, threshold.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize paths relative to root directory.
    ///
    /// `build.output` is kept relative; aggregate locators are built from it.
    fn normalize_paths(&mut self, root: &Path) {
        self.root = crate::utils::path::normalize_path(root);
        self.cache.state = resolve_path(&self.cache.state, &self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Normalization makes every path absolute, hiding what the user wrote.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the resolved configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.cache.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
