//! Deferred deletion of orphaned aggregates.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::freshness::is_stale;
use crate::log;
use crate::storage::ArtifactStorage;

/// Outcome of one sweep over the artifact directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub deleted: Vec<PathBuf>,
    /// Too young, or mtime unreadable.
    pub kept: Vec<PathBuf>,
    /// Stale, but deletion failed.
    pub failed: Vec<PathBuf>,
}

/// Delete every file under `dir` whose age exceeds `threshold` at `now`.
///
/// A missing directory is an empty sweep. A failed deletion is logged and
/// recorded; the sweep carries on with the next file.
pub fn sweep_stale(
    storage: &dyn ArtifactStorage,
    dir: &Path,
    now: SystemTime,
    threshold: Duration,
) -> io::Result<SweepReport> {
    let mut report = SweepReport::default();
    if !storage.is_dir(dir) {
        return Ok(report);
    }

    for path in storage.scan(dir)? {
        let stale = storage
            .modified(&path)
            .is_some_and(|mtime| is_stale(mtime, now, threshold));

        if !stale {
            report.kept.push(path);
            continue;
        }

        match storage.delete(&path) {
            Ok(()) => report.deleted.push(path),
            Err(e) => {
                log!("warning"; "failed to delete {}: {}", path.display(), e);
                report.failed.push(path);
            }
        }
    }

    Ok(report)
}
