//! Security-group cleanup for a (region, tag) pair
//!
//! A tag's ingress rules live in a single group named exactly after the
//! tag. Cleanup deletes the group if it exists and purges every port-spec
//! variant it was cached under.

use crate::error::{CleanupFailure, ResourceKind};
use crate::registry::SecurityGroupStore;
use std::sync::Arc;
use tagsweep_cloud::{Region, SecurityGroupService};
use tracing::debug;

/// Removes the tag-named security group from a region and the local cache
pub struct SecurityGroupCleaner {
    security_groups: Arc<dyn SecurityGroupService>,
    groups: SecurityGroupStore,
}

impl SecurityGroupCleaner {
    pub fn new(security_groups: Arc<dyn SecurityGroupService>, groups: SecurityGroupStore) -> Self {
        Self {
            security_groups,
            groups,
        }
    }

    /// Delete the security group named exactly `tag`, if it exists.
    ///
    /// An absent group is a no-op, never an error: teardown must stay
    /// safely re-runnable. Eviction ignores the port-spec component of
    /// the cache key so every cached variant of the group goes at once.
    pub async fn clean(&self, region: &Region, tag: &str) -> Vec<CleanupFailure> {
        let existing = match self.security_groups.list_security_groups(region, tag).await {
            Ok(groups) => groups,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => {
                return vec![CleanupFailure::new(
                    region.clone(),
                    ResourceKind::SecurityGroup,
                    tag,
                    e,
                )];
            }
        };

        if existing.is_empty() {
            return Vec::new();
        }

        debug!(region = %region, name = %tag, "deleting security group");
        match self.security_groups.delete_security_group(region, tag).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                debug!(region = %region, name = %tag, "security group already absent");
            }
            Err(e) => {
                return vec![CleanupFailure::new(
                    region.clone(),
                    ResourceKind::SecurityGroup,
                    tag,
                    e,
                )];
            }
        }

        let evicted = self.groups.evict_all_matching(region, tag);
        debug!(region = %region, name = %tag, evicted, "deleted security group");
        Vec::new()
    }
}
