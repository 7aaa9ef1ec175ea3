//! Local registries mirroring remote auxiliary resources
//!
//! Provisioning populates these caches so repeated launches under the
//! same tag skip redundant provider calls; teardown evicts them so a
//! removed remote resource is never reused from stale local state. The
//! provider is always authoritative — the caches are a best-effort
//! optimization only.
//!
//! Both stores are cheap-to-clone handles over a shared synchronized
//! map. Mutation holds the lock only for the map operation itself; no
//! provider call happens under a lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tagsweep_cloud::{KeyPair, PortsRegionTag, Region, RegionTag};

/// Credential key pairs cached by (region, key-pair name)
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<Mutex<HashMap<RegionTag, KeyPair>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: RegionTag, key_pair: KeyPair) {
        self.inner.lock().expect("credential store poisoned").insert(key, key_pair);
    }

    pub fn get(&self, key: &RegionTag) -> Option<KeyPair> {
        self.inner
            .lock()
            .expect("credential store poisoned")
            .get(key)
            .cloned()
    }

    /// Remove the entry for an exact (region, name) key, if present
    pub fn evict(&self, key: &RegionTag) -> Option<KeyPair> {
        self.inner.lock().expect("credential store poisoned").remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("credential store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Security groups cached by (region, tag, port spec).
///
/// The value is the provider-side group identifier.
#[derive(Debug, Clone, Default)]
pub struct SecurityGroupStore {
    inner: Arc<Mutex<HashMap<PortsRegionTag, String>>>,
}

impl SecurityGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: PortsRegionTag, group_id: impl Into<String>) {
        self.inner
            .lock()
            .expect("security group store poisoned")
            .insert(key, group_id.into());
    }

    pub fn get(&self, key: &PortsRegionTag) -> Option<String> {
        self.inner
            .lock()
            .expect("security group store poisoned")
            .get(key)
            .cloned()
    }

    /// Remove every entry for the (region, tag) pair, across all
    /// port-spec variants it may have been cached under.
    ///
    /// A deliberately named partial-key eviction: deleting one remote
    /// group must purge every local variant at once.
    pub fn evict_all_matching(&self, region: &Region, tag: &str) -> usize {
        let mut map = self.inner.lock().expect("security group store poisoned");
        let before = map.len();
        map.retain(|key, _| !key.matches_region_tag(region, tag));
        before - map.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("security group store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
