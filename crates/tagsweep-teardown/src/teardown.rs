//! Tag-scoped teardown orchestration
//!
//! Destroys every node carrying a tag, discovers which regions those
//! nodes occupied, and removes the tag's auxiliary resources (key pairs,
//! security group) from each of them exactly once.

use crate::error::{CleanupFailure, ResourceKind, Result, TeardownError};
use crate::keypair::KeyPairCleaner;
use crate::region::RegionResolver;
use crate::secgroup::SecurityGroupCleaner;
use std::collections::BTreeSet;
use std::sync::Arc;
use tagsweep_cloud::{NodeStrategy, Region};
use tracing::{debug, info};

/// Coordinates node destruction with per-region auxiliary cleanup.
///
/// Collaborators are passed in explicitly; the orchestrator owns no
/// provider state of its own. Cleanup is idempotent per (region, tag)
/// pair: once the resources are absent, re-running changes nothing.
pub struct TeardownOrchestrator {
    nodes: Arc<dyn NodeStrategy>,
    key_pairs: KeyPairCleaner,
    security_groups: SecurityGroupCleaner,
    resolver: RegionResolver,
}

impl TeardownOrchestrator {
    pub fn new(
        nodes: Arc<dyn NodeStrategy>,
        key_pairs: KeyPairCleaner,
        security_groups: SecurityGroupCleaner,
        resolver: RegionResolver,
    ) -> Self {
        Self {
            nodes,
            key_pairs,
            security_groups,
            resolver,
        }
    }

    /// Destroy all nodes carrying `tag`, then clean each occupied region.
    ///
    /// The destroy step is delegated (its failure policy is owned by the
    /// [`NodeStrategy`]) and short-circuits on failure. Cleanup failures
    /// never abort sibling resources or regions; every reachable step is
    /// attempted before an aggregated [`TeardownError::Partial`] is
    /// returned. Full success is silent.
    pub async fn destroy_nodes_with_tag(&self, tag: &str) -> Result<()> {
        info!(tag, "destroying nodes");
        self.nodes
            .destroy_nodes_with_tag(tag)
            .await
            .map_err(TeardownError::Destroy)?;

        let mut failures = Vec::new();
        let regions = self.discover_regions(tag, &mut failures).await;
        debug!(tag, regions = ?regions, "discovered regions for cleanup");

        for region in &regions {
            info!(tag, region = %region, "cleaning auxiliary resources");
            failures.extend(self.key_pairs.clean(region, tag).await);
            failures.extend(self.security_groups.clean(region, tag).await);
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TeardownError::Partial { failures })
        }
    }

    /// Distinct regions occupied by the tag's nodes.
    ///
    /// The post-destroy listing still reports recently terminated nodes,
    /// which is what makes their regions discoverable; nodes that failed
    /// to destroy also contribute theirs, since auxiliary resources can
    /// be cleaned even when the node survives. Auxiliary resources are
    /// provisioned once per region per tag, so cleanup runs per region,
    /// never per node. When no node remains to derive a region from, the
    /// resolver's default region is cleaned instead.
    async fn discover_regions(
        &self,
        tag: &str,
        failures: &mut Vec<CleanupFailure>,
    ) -> BTreeSet<Region> {
        let mut regions = BTreeSet::new();
        match self.nodes.list_nodes_with_tag(tag).await {
            Ok(nodes) => {
                for node in &nodes {
                    regions.insert(self.resolver.resolve(Some(node)));
                }
                if regions.is_empty() {
                    regions.insert(self.resolver.resolve(None));
                }
            }
            Err(e) => {
                failures.push(CleanupFailure::new(
                    self.resolver.default_region().clone(),
                    ResourceKind::Nodes,
                    tag,
                    e,
                ));
            }
        }
        regions
    }
}
