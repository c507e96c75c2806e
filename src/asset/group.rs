//! Grouping of ordered asset descriptors.
//!
//! A group is the unit the aggregator resolves: every group becomes exactly
//! one stylesheet reference. Grouping never reorders assets; it only merges
//! adjacent descriptors that can share an aggregate.

use anyhow::Result;

use super::{AssetDescriptor, AssetType};

/// An ordered run of assets resolved to a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetGroup {
    /// Local files. With `preprocess` the items are aggregated, otherwise the
    /// group holds a single file that is referenced as-is.
    File {
        preprocess: bool,
        media: String,
        items: Vec<AssetDescriptor>,
    },
    /// A single externally hosted stylesheet.
    External { media: String, asset: AssetDescriptor },
}

impl AssetGroup {
    pub fn kind(&self) -> AssetType {
        match self {
            Self::File { .. } => AssetType::File,
            Self::External { .. } => AssetType::External,
        }
    }

    pub fn media(&self) -> &str {
        match self {
            Self::File { media, .. } | Self::External { media, .. } => media,
        }
    }

    pub fn preprocess(&self) -> bool {
        match self {
            Self::File { preprocess, .. } => *preprocess,
            Self::External { .. } => false,
        }
    }

    /// Number of assets in the group.
    pub fn len(&self) -> usize {
        match self {
            Self::File { items, .. } => items.len(),
            Self::External { .. } => 1,
        }
    }
}

/// Partitions an ordered asset list into ordered groups.
pub trait Grouper {
    /// `libraries` names the asset libraries the assets came from. It is
    /// informational; implementations may ignore it.
    fn group(&self, assets: &[AssetDescriptor], libraries: &[String]) -> Result<Vec<AssetGroup>>;
}

/// Default grouping policy.
///
/// - aggregatable files sharing `media` with the previous aggregatable file
///   join its group
/// - non-aggregatable files and external assets get a group of their own
#[derive(Debug, Clone, Copy, Default)]
pub struct CssGrouper;

impl Grouper for CssGrouper {
    fn group(&self, assets: &[AssetDescriptor], _libraries: &[String]) -> Result<Vec<AssetGroup>> {
        let mut groups: Vec<AssetGroup> = Vec::new();

        for asset in assets {
            match (asset.kind, asset.preprocess) {
                (AssetType::File, true) => {
                    if let Some(AssetGroup::File {
                        preprocess: true,
                        media,
                        items,
                    }) = groups.last_mut()
                        && *media == asset.media
                    {
                        items.push(asset.clone());
                        continue;
                    }
                    groups.push(AssetGroup::File {
                        preprocess: true,
                        media: asset.media.clone(),
                        items: vec![asset.clone()],
                    });
                }
                (AssetType::File, false) => groups.push(AssetGroup::File {
                    preprocess: false,
                    media: asset.media.clone(),
                    items: vec![asset.clone()],
                }),
                (AssetType::External, _) => groups.push(AssetGroup::External {
                    media: asset.media.clone(),
                    asset: asset.clone(),
                }),
            }
        }

        Ok(groups)
    }
}
