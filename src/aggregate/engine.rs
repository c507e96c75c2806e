//! The aggregation engine.
//!
//! `optimize` resolves every asset group to one stylesheet reference. Groups
//! eligible for aggregation are looked up in the cache map by fingerprint;
//! an aggregate is only built when the map has no entry for the group or
//! the recorded artifact is gone from storage.
//!
//! The map is loaded once per call and written back after each new
//! aggregate. There is no locking: two callers missing on the same group
//! both build it, and whichever map write lands last wins. The loser's
//! artifact is orphaned until the staleness sweep removes it.
//!
//! Entries for groups that are no longer requested stay in the map until
//! `delete_all` drops the whole map.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use super::cleanup::{SweepReport, sweep_stale};
use super::imports::hoist_imports;
use super::{AggregateError, fingerprint};
use crate::asset::{AssetDescriptor, AssetGroup, AssetOptimizer, AssetType, Dumper, Grouper, License};
use crate::freshness::{Clock, SystemClock};
use crate::state::{CacheMap, StateStore};
use crate::storage::ArtifactStorage;
use crate::debug;

/// State key holding the CSS cache map.
pub const CSS_CACHE_KEY: &str = "css_cache_files";

/// Default age after which orphaned aggregates may be deleted: 30 days.
pub const DEFAULT_STALE_FILE_THRESHOLD: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Content kind passed to the dumper.
const CSS_KIND: &str = "css";

static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Where the cache lives and how long orphans are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// State key of the cache map.
    pub key: String,
    /// Directory the dumper writes aggregates to; swept by `delete_all`.
    pub artifact_dir: PathBuf,
    pub stale_file_threshold: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            key: CSS_CACHE_KEY.into(),
            artifact_dir: PathBuf::from("css"),
            stale_file_threshold: DEFAULT_STALE_FILE_THRESHOLD,
        }
    }
}

/// One resolved stylesheet reference per asset group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub media: String,
    pub preprocess: bool,
    /// Locator of the stylesheet to reference.
    pub data: String,
    /// True when `data` points at a generated aggregate.
    pub preprocessed: bool,
}

impl ResolvedReference {
    fn passthrough(group: &AssetGroup, data: &str) -> Self {
        Self {
            kind: group.kind(),
            media: group.media().to_string(),
            preprocess: group.preprocess(),
            data: data.to_string(),
            preprocessed: false,
        }
    }
}

/// Resolves CSS asset lists to aggregates, reusing earlier aggregates.
///
/// All collaborators are borrowed; the caller owns the state store and
/// storage handles.
pub struct Aggregator<'a> {
    grouper: &'a dyn Grouper,
    optimizer: &'a dyn AssetOptimizer,
    dumper: &'a dyn Dumper,
    state: &'a dyn StateStore,
    storage: &'a dyn ArtifactStorage,
    clock: &'a dyn Clock,
    settings: CacheSettings,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        grouper: &'a dyn Grouper,
        optimizer: &'a dyn AssetOptimizer,
        dumper: &'a dyn Dumper,
        state: &'a dyn StateStore,
        storage: &'a dyn ArtifactStorage,
        settings: CacheSettings,
    ) -> Self {
        Self {
            grouper,
            optimizer,
            dumper,
            state,
            storage,
            clock: &SYSTEM_CLOCK,
            settings,
        }
    }

    /// Replace the wall clock used by `delete_all`.
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Resolve `assets` into one reference per group, in group order.
    ///
    /// `libraries` is handed to the grouper untouched.
    pub fn optimize(
        &self,
        assets: &[AssetDescriptor],
        libraries: &[String],
    ) -> Result<Vec<ResolvedReference>> {
        let groups = self.grouper.group(assets, libraries)?;
        let mut map = CacheMap::load(self.state, &self.settings.key)?.unwrap_or_default();

        let mut resolved = Vec::with_capacity(groups.len());
        for group in &groups {
            let reference = match group {
                AssetGroup::External { asset, .. } => {
                    ResolvedReference::passthrough(group, &asset.data)
                }
                AssetGroup::File {
                    preprocess: false,
                    items,
                    ..
                } => {
                    let asset = items
                        .first()
                        .ok_or(AggregateError::EmptyGroup { kind: "file" })?;
                    ResolvedReference::passthrough(group, &asset.data)
                }
                AssetGroup::File {
                    preprocess: true,
                    items,
                    ..
                } => {
                    let locator = self.resolve_aggregate(items, &mut map)?;
                    ResolvedReference {
                        preprocessed: true,
                        ..ResolvedReference::passthrough(group, &locator)
                    }
                }
            };
            resolved.push(reference);
        }

        Ok(resolved)
    }

    /// Reuse the recorded aggregate for `items`, or build, dump and record one.
    fn resolve_aggregate(&self, items: &[AssetDescriptor], map: &mut CacheMap) -> Result<String> {
        if items.is_empty() {
            return Err(AggregateError::EmptyGroup { kind: "aggregate" }.into());
        }

        let key = fingerprint(items)?;
        let hex = key.to_hex();

        if let Some(locator) = map.get(&hex)
            && !locator.is_empty()
        {
            if self.storage.exists(Path::new(locator)) {
                debug!("cache"; "hit {} -> {}", key, locator);
                return Ok(locator.to_string());
            }
            debug!("cache"; "artifact missing for {}: {}", key, locator);
        }

        debug!("cache"; "building aggregate {} from {} assets", key, items.len());
        let data = self.build_aggregate(items)?;
        let locator = self.dumper.dump(&data, CSS_KIND)?;

        map.insert(hex, locator.clone());
        map.save(self.state, &self.settings.key)?;

        Ok(locator)
    }

    /// Concatenate the optimized members, with license comments, imports first.
    fn build_aggregate(&self, items: &[AssetDescriptor]) -> Result<String> {
        let mut data = String::new();
        let mut current: Option<&License> = None;

        for asset in items {
            if let Some(license) = &asset.license
                && current != Some(license)
            {
                data.push_str(&license.comment());
            }
            current = asset.license.as_ref();
            data.push_str(&self.optimizer.optimize(asset)?);
        }

        Ok(hoist_imports(&data))
    }

    /// The stored cache map, `None` when nothing has been recorded.
    pub fn get_all(&self) -> Result<Option<CacheMap>> {
        CacheMap::load(self.state, &self.settings.key)
    }

    /// Drop the whole cache map, then delete aggregates older than the
    /// stale threshold.
    ///
    /// Younger aggregates survive: pages rendered before the reset may
    /// still link to them.
    pub fn delete_all(&self) -> Result<SweepReport> {
        self.state.delete(&self.settings.key)?;

        let report = sweep_stale(
            self.storage,
            &self.settings.artifact_dir,
            self.clock.now(),
            self.settings.stale_file_threshold,
        )?;

        debug!(
            "clean";
            "deleted {}, kept {}, failed {}",
            report.deleted.len(),
            report.kept.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
