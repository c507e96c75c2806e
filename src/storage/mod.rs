//! Access to the storage holding generated aggregates.

mod local;

pub use local::LocalStorage;

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File queries and deletion against the artifact storage.
///
/// Relative paths are interpreted by the implementation (for
/// [`LocalStorage`], relative to the web root).
pub trait ArtifactStorage {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Modification time, `None` when it cannot be read.
    fn modified(&self, path: &Path) -> Option<SystemTime>;

    /// All files below `dir`, in a stable order.
    fn scan(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    fn delete(&self, path: &Path) -> io::Result<()>;
}
