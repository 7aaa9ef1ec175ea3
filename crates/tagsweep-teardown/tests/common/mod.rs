use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tagsweep_cloud::{
    CloudError, KeyPair, KeyPairService, Node, NodeState, NodeStrategy, Region, SecurityGroup,
    SecurityGroupService,
};

/// In-memory cloud double implementing the three collaborator traits.
///
/// Deletions mutate the in-memory resource sets; named resources can be
/// made to fail deletion, and call counters allow asserting how many
/// provider calls a teardown actually issued.
#[derive(Default)]
pub struct InMemoryCloud {
    nodes: Mutex<Vec<Node>>,
    key_pairs: Mutex<Vec<KeyPair>>,
    security_groups: Mutex<Vec<SecurityGroup>>,

    fail_destroy: AtomicBool,
    failing_key_pairs: Mutex<HashSet<String>>,
    failing_security_groups: Mutex<HashSet<String>>,

    pub destroy_calls: AtomicUsize,
    pub key_pair_delete_calls: AtomicUsize,
    pub security_group_delete_calls: AtomicUsize,
    key_pair_list_regions: Mutex<Vec<Region>>,
}

impl InMemoryCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&self, node: Node) {
        self.nodes.lock().unwrap().push(node);
    }

    pub fn add_key_pair(&self, region: &str, name: &str) {
        self.key_pairs
            .lock()
            .unwrap()
            .push(KeyPair::new(Region::new(region), name));
    }

    pub fn add_security_group(&self, region: &str, name: &str) {
        self.security_groups
            .lock()
            .unwrap()
            .push(SecurityGroup::new(Region::new(region), name));
    }

    #[allow(dead_code)]
    pub fn fail_destroy(&self) {
        self.fail_destroy.store(true, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn fail_key_pair_delete(&self, name: &str) {
        self.failing_key_pairs.lock().unwrap().insert(name.to_string());
    }

    #[allow(dead_code)]
    pub fn fail_security_group_delete(&self, name: &str) {
        self.failing_security_groups
            .lock()
            .unwrap()
            .insert(name.to_string());
    }

    pub fn key_pair_names(&self, region: &str) -> Vec<String> {
        let region = Region::new(region);
        let mut names: Vec<String> = self
            .key_pairs
            .lock()
            .unwrap()
            .iter()
            .filter(|kp| kp.region == region)
            .map(|kp| kp.name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn has_security_group(&self, region: &str, name: &str) -> bool {
        let region = Region::new(region);
        self.security_groups
            .lock()
            .unwrap()
            .iter()
            .any(|sg| sg.region == region && sg.name == name)
    }

    #[allow(dead_code)]
    pub fn node_states(&self, tag: &str) -> Vec<NodeState> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.tag == tag)
            .map(|n| n.state)
            .collect()
    }

    /// Regions the key-pair listing was called for, one entry per call
    #[allow(dead_code)]
    pub fn key_pair_list_regions(&self) -> Vec<Region> {
        self.key_pair_list_regions.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeStrategy for InMemoryCloud {
    async fn list_nodes_with_tag(&self, tag: &str) -> tagsweep_cloud::Result<Vec<Node>> {
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.tag == tag)
            .cloned()
            .collect())
    }

    async fn destroy_nodes_with_tag(&self, tag: &str) -> tagsweep_cloud::Result<()> {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(CloudError::ApiError("destroy rejected".into()));
        }
        for node in self.nodes.lock().unwrap().iter_mut() {
            if node.tag == tag {
                node.state = NodeState::Terminated;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl KeyPairService for InMemoryCloud {
    async fn list_key_pairs(&self, region: &Region) -> tagsweep_cloud::Result<Vec<KeyPair>> {
        self.key_pair_list_regions.lock().unwrap().push(region.clone());
        Ok(self
            .key_pairs
            .lock()
            .unwrap()
            .iter()
            .filter(|kp| kp.region == *region)
            .cloned()
            .collect())
    }

    async fn delete_key_pair(&self, region: &Region, name: &str) -> tagsweep_cloud::Result<()> {
        self.key_pair_delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_key_pairs.lock().unwrap().contains(name) {
            return Err(CloudError::ApiError(format!("permission denied: {name}")));
        }
        let mut key_pairs = self.key_pairs.lock().unwrap();
        let before = key_pairs.len();
        key_pairs.retain(|kp| !(kp.region == *region && kp.name == name));
        if key_pairs.len() == before {
            return Err(CloudError::ResourceNotFound(name.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SecurityGroupService for InMemoryCloud {
    async fn list_security_groups(
        &self,
        region: &Region,
        name: &str,
    ) -> tagsweep_cloud::Result<Vec<SecurityGroup>> {
        Ok(self
            .security_groups
            .lock()
            .unwrap()
            .iter()
            .filter(|sg| sg.region == *region && sg.name == name)
            .cloned()
            .collect())
    }

    async fn delete_security_group(
        &self,
        region: &Region,
        name: &str,
    ) -> tagsweep_cloud::Result<()> {
        self.security_group_delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_security_groups.lock().unwrap().contains(name) {
            return Err(CloudError::ApiError(format!("dependency violation: {name}")));
        }
        let mut groups = self.security_groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|sg| !(sg.region == *region && sg.name == name));
        if groups.len() == before {
            return Err(CloudError::ResourceNotFound(name.to_string()));
        }
        Ok(())
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
