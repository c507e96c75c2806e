//! Path normalization utilities.
//!
//! Provides consistent path handling across the codebase:
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `to_locator` - root-relative, `/`-separated locator strings

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Express `path` as a locator relative to `root`, using `/` separators.
///
/// Paths outside the root are kept whole.
///
/// # Example
/// ```ignore
/// to_locator(Path::new("/site"), Path::new("/site/public/css/a.css")) // "public/css/a.css"
/// ```
pub fn to_locator(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_to_locator_strips_root() {
        let locator = to_locator(Path::new("/site"), Path::new("/site/public/css/a.css"));
        assert_eq!(locator, "public/css/a.css");
    }

    #[test]
    fn test_to_locator_outside_root() {
        let locator = to_locator(Path::new("/site"), Path::new("/other/a.css"));
        assert_eq!(locator, "/other/a.css");
    }
}
