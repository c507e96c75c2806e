//! Optimize command implementation.
//!
//! Reads an asset manifest, resolves it through the aggregator and prints
//! the resolved references as JSON.

use anyhow::Result;

use super::cache::Backends;
use super::{OptimizeArgs, write_json};
use crate::asset::read_manifest;
use crate::config::Config;
use crate::log;
use crate::utils::plural_count;

/// Execute optimize command
pub fn run_optimize(args: &OptimizeArgs, config: &Config) -> Result<()> {
    let assets = read_manifest(&args.manifest)?;

    let backends = Backends::new(config);
    let resolved = backends
        .aggregator(config)
        .optimize(&assets, &args.libraries)?;

    let aggregated = resolved.iter().filter(|r| r.preprocessed).count();
    log!(
        "optimize";
        "resolved {} into {} ({} aggregated)",
        plural_count(assets.len(), "stylesheet"),
        plural_count(resolved.len(), "reference"),
        aggregated
    );

    write_json(&resolved, args.pretty, args.output.as_deref())
}
