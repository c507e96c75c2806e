//! Persisting aggregate content to the artifact directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::debug;
use crate::utils::fs::{touch, write_atomic};
use crate::utils::hash;
use crate::utils::path::to_locator;

/// Stores generated content and returns a stable locator for it.
pub trait Dumper {
    /// `kind` is the content type and file extension (e.g. `"css"`).
    fn dump(&self, data: &str, kind: &str) -> Result<String>;
}

/// Content-addressed dumper writing `<output>/<kind>_<hash>.<kind>`.
///
/// An existing file with the same content is reused and its mtime is
/// refreshed, so the stale sweep measures age from the last dump.
#[derive(Debug, Clone)]
pub struct FileDumper {
    root: PathBuf,
    output: PathBuf,
}

impl FileDumper {
    /// `output` is the artifact directory; locators are relative to `root`.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
        }
    }

    /// Absolute artifact path for `data`.
    pub fn path_for(&self, data: &str, kind: &str) -> PathBuf {
        let filename = format!("{kind}_{}.{kind}", hash::fingerprint(data));
        self.root.join(&self.output).join(filename)
    }
}

impl Dumper for FileDumper {
    fn dump(&self, data: &str, kind: &str) -> Result<String> {
        let path = self.path_for(data, kind);

        if path.exists() {
            touch(&path)
                .with_context(|| format!("failed to refresh aggregate `{}`", path.display()))?;
            debug!("dump"; "reusing {}", path.display());
        } else {
            write_atomic(&path, data.as_bytes())
                .with_context(|| format!("failed to write aggregate `{}`", path.display()))?;
            debug!("dump"; "wrote {}", path.display());
        }

        Ok(to_locator(&self.root, &path))
    }
}
