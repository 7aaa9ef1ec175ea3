//! Region resolution
//!
//! Maps a node (or the absence of one) to the region its auxiliary
//! resources live in. Resolution never fails: a node without a recorded
//! region, or no node at all, falls back to the configured default.

use serde::{Deserialize, Serialize};
use tagsweep_cloud::{Node, Region};

/// Resolves the region for a node, falling back to a configured default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResolver {
    default_region: Region,
}

impl RegionResolver {
    pub fn new(default_region: Region) -> Self {
        Self { default_region }
    }

    pub fn default_region(&self) -> &Region {
        &self.default_region
    }

    /// Region recorded on the node, or the default when no node (or no
    /// recorded region) is available. Pure, no provider calls.
    pub fn resolve(&self, node: Option<&Node>) -> Region {
        node.and_then(|node| node.region.clone())
            .unwrap_or_else(|| self.default_region.clone())
    }
}
