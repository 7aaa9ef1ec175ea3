//! Key-pair cleanup for a (region, tag) pair
//!
//! Key pairs provisioned for a tag are named `<tag>-<n>`, one generation
//! per numeric suffix. Cleanup lists the whole region once, deletes every
//! matching name, and evicts the corresponding credential cache entries.

use crate::error::{CleanupFailure, ResourceKind};
use crate::registry::CredentialStore;
use regex::Regex;
use std::sync::Arc;
use tagsweep_cloud::{KeyPairService, Region, RegionTag};
use tracing::debug;

/// Removes tag-derived key pairs from a region and the local cache
pub struct KeyPairCleaner {
    key_pairs: Arc<dyn KeyPairService>,
    credentials: CredentialStore,
}

/// Pattern matching names of key pairs provisioned for the tag.
///
/// The tag is user-supplied and must match literally; `prod.web` may not
/// match `prodXweb-1`.
fn name_pattern(tag: &str) -> Regex {
    Regex::new(&format!("^{}-[0-9]+$", regex::escape(tag)))
        .expect("escaped tag always forms a valid pattern")
}

impl KeyPairCleaner {
    pub fn new(key_pairs: Arc<dyn KeyPairService>, credentials: CredentialStore) -> Self {
        Self {
            key_pairs,
            credentials,
        }
    }

    /// Delete every key pair named `<tag>-<n>` in the region.
    ///
    /// A deletion failure does not stop the remaining matches; all
    /// failures are returned for the orchestrator to aggregate. Zero
    /// matches is a silent success.
    pub async fn clean(&self, region: &Region, tag: &str) -> Vec<CleanupFailure> {
        let pattern = name_pattern(tag);

        let key_pairs = match self.key_pairs.list_key_pairs(region).await {
            Ok(key_pairs) => key_pairs,
            Err(e) => {
                return vec![CleanupFailure::new(
                    region.clone(),
                    ResourceKind::KeyPair,
                    tag,
                    e,
                )];
            }
        };

        let mut failures = Vec::new();
        for key_pair in key_pairs.iter().filter(|kp| pattern.is_match(&kp.name)) {
            debug!(region = %region, name = %key_pair.name, "deleting key pair");
            match self.key_pairs.delete_key_pair(region, &key_pair.name).await {
                Ok(()) => {
                    self.credentials
                        .evict(&RegionTag::new(region.clone(), key_pair.name.as_str()));
                    debug!(region = %region, name = %key_pair.name, "deleted key pair");
                }
                Err(e) if e.is_not_found() => {
                    // Already gone remotely; the cache entry must still go
                    self.credentials
                        .evict(&RegionTag::new(region.clone(), key_pair.name.as_str()));
                    debug!(region = %region, name = %key_pair.name, "key pair already absent");
                }
                Err(e) => {
                    failures.push(CleanupFailure::new(
                        region.clone(),
                        ResourceKind::KeyPair,
                        key_pair.name.as_str(),
                        e,
                    ));
                }
            }
        }
        failures
    }
}
