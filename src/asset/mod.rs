//! Asset descriptors, grouping, and the per-asset collaborators of the
//! aggregator (optimizer, dumper).

mod descriptor;
mod dump;
mod group;
mod manifest;
pub mod minify;
mod optimize;

// Types
pub use descriptor::{AssetDescriptor, AssetType, License};
pub use group::{AssetGroup, CssGrouper, Grouper};

// Collaborators
pub use dump::{Dumper, FileDumper};
pub use optimize::{AssetOptimizer, CssOptimizer, rebase_urls};

// Manifest input
pub use manifest::{parse_manifest, read_manifest};
