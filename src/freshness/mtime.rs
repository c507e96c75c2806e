//! Mtime-based staleness detection for generated aggregates.
//!
//! An aggregate that is no longer referenced by the cache map may still be
//! linked from pages rendered earlier, so it is only removed once its
//! modification time falls further behind the clock than the configured
//! threshold.

use std::path::Path;
use std::time::{Duration, SystemTime};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Check whether a file last modified at `mtime` is stale at `now`.
///
/// Stale means `now - mtime > threshold`, strictly greater. An mtime in the
/// future is never stale.
///
/// # Arguments
///
/// * `mtime` - Modification time of the artifact
/// * `now` - Current time
/// * `threshold` - Minimum age before deletion
#[inline]
pub fn is_stale(mtime: SystemTime, now: SystemTime, threshold: Duration) -> bool {
    now.duration_since(mtime)
        .is_ok_and(|age| age > threshold)
}

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}
