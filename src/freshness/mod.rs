//! Freshness detection: mtime-based staleness for generated artifacts.

pub mod mtime;

pub use mtime::{Clock, SystemClock, get_mtime, is_stale};
