//! Local filesystem artifact storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use jwalk::WalkDir;

use super::ArtifactStorage;
use crate::freshness::get_mtime;

/// Artifacts on the local disk, with relative paths resolved against `root`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute paths pass through unchanged.
    #[inline]
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ArtifactStorage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        get_mtime(&self.resolve(path))
    }

    fn scan(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let dir = self.resolve(dir);
        let mut files = Vec::new();
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(self.resolve(path))
    }
}
