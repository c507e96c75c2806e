//! Cache inspection and cleanup commands.

use anyhow::Result;

use super::write_json;
use crate::aggregate::Aggregator;
use crate::asset::{CssGrouper, CssOptimizer, FileDumper};
use crate::config::Config;
use crate::log;
use crate::state::JsonFileState;
use crate::storage::LocalStorage;
use crate::utils::plural_count;

/// File-backed collaborators for one command run, rooted at the project root.
pub(crate) struct Backends {
    optimizer: CssOptimizer,
    dumper: FileDumper,
    state: JsonFileState,
    storage: LocalStorage,
}

impl Backends {
    pub fn new(config: &Config) -> Self {
        let root = config.get_root();
        Self {
            optimizer: CssOptimizer::new(root)
                .with_minify(config.build.minify)
                .with_rebase_urls(config.build.rebase_urls),
            dumper: FileDumper::new(root, &config.build.output),
            state: JsonFileState::new(&config.cache.state),
            storage: LocalStorage::new(root),
        }
    }

    pub fn aggregator(&self, config: &Config) -> Aggregator<'_> {
        Aggregator::new(
            &CssGrouper,
            &self.optimizer,
            &self.dumper,
            &self.state,
            &self.storage,
            config.cache_settings(),
        )
    }
}

/// Print the stored cache map (`null` when nothing is recorded).
pub fn run_list(pretty: bool, config: &Config) -> Result<()> {
    let backends = Backends::new(config);
    let map = backends.aggregator(config).get_all()?;

    if let Some(map) = &map {
        log!("cache"; "{}", plural_count(map.len(), "aggregate"));
    }
    write_json(&map, pretty, None)
}

/// Drop the cache map and sweep stale aggregates.
pub fn run_clean(config: &Config) -> Result<()> {
    let backends = Backends::new(config);
    let report = backends.aggregator(config).delete_all()?;

    log!(
        "clean";
        "deleted {}, kept {}",
        plural_count(report.deleted.len(), "stale aggregate"),
        report.kept.len()
    );
    if !report.failed.is_empty() {
        log!("warning"; "could not delete {}", plural_count(report.failed.len(), "file"));
    }

    Ok(())
}
