//! CSS aggregation with a persistent fingerprint cache.
//!
//! # Module Structure
//!
//! ```text
//! aggregate/
//! ├── engine       # Aggregator: optimize / get_all / delete_all
//! ├── fingerprint  # ordered source list -> 256-bit key
//! ├── imports      # @import hoisting
//! ├── cleanup      # staleness sweep over the artifact directory
//! └── error        # AggregateError
//! ```

mod cleanup;
mod engine;
mod error;
mod fingerprint;
mod imports;


pub use cleanup::{SweepReport, sweep_stale};
pub use engine::{
    Aggregator, CSS_CACHE_KEY, CacheSettings, DEFAULT_STALE_FILE_THRESHOLD, ResolvedReference,
};
pub use error::AggregateError;
pub use fingerprint::{Fingerprint, fingerprint};
pub use imports::hoist_imports;
