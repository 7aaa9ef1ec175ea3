//! Domain model for tag-scoped cloud resources
//!
//! A tag is an opaque label correlating a group of nodes with the
//! region-scoped auxiliary resources provisioned alongside them: one
//! key pair generation per region (named `<tag>-<n>`) and one security
//! group per region (named exactly `<tag>`).

use serde::{Deserialize, Serialize};

/// An isolated deployment zone of the cloud provider.
///
/// Resources in one region are invisible to another, so every auxiliary
/// resource is keyed by region first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Region(String);

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle state of a compute node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    Pending,
    Running,
    Suspended,
    Terminated,
    Error,
    Unrecognized,
}

impl NodeState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, NodeState::Terminated)
    }
}

/// A compute node as seen by the teardown path.
///
/// Owned by the provisioning subsystem; teardown only reads the tag,
/// state, and region attributes. A listing taken right after a destroy
/// may still show nodes in `Terminated` state, which is exactly what
/// region discovery relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Provider-assigned node identifier
    pub id: String,

    /// Tag correlating the node with its auxiliary resources
    pub tag: String,

    /// Current lifecycle state
    pub state: NodeState,

    /// Region the node was launched in, when the provider reports one
    pub region: Option<Region>,
}

impl Node {
    pub fn new(id: impl Into<String>, tag: impl Into<String>, state: NodeState) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            state,
            region: None,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

/// A named credential object living in a region.
///
/// Key pairs provisioned for a tag follow the `<tag>-<numeric-suffix>`
/// naming convention so successive generations under the same tag stay
/// distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPair {
    pub region: Region,
    pub name: String,

    /// PEM-encoded private key material, present only on the creating call
    pub key_material: Option<String>,

    pub fingerprint: Option<String>,
}

impl KeyPair {
    pub fn new(region: Region, name: impl Into<String>) -> Self {
        Self {
            region,
            name: name.into(),
            key_material: None,
            fingerprint: None,
        }
    }
}

/// A named collection of network ingress rules, named exactly after the tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub region: Region,
    pub name: String,
    pub description: Option<String>,
}

impl SecurityGroup {
    pub fn new(region: Region, name: impl Into<String>) -> Self {
        Self {
            region,
            name: name.into(),
            description: None,
        }
    }
}

/// Cache key for a credential key pair: (region, key-pair name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionTag {
    pub region: Region,
    pub name: String,
}

impl RegionTag {
    pub fn new(region: Region, name: impl Into<String>) -> Self {
        Self {
            region,
            name: name.into(),
        }
    }
}

/// Cache key for a security group: (region, tag, port spec).
///
/// The same group may be cached under several port-spec variants, so
/// tag-scoped eviction matches on region and tag only and ignores the
/// ports component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortsRegionTag {
    pub region: Region,
    pub tag: String,
    pub ports: Option<Vec<u16>>,
}

impl PortsRegionTag {
    pub fn new(region: Region, tag: impl Into<String>, ports: Option<Vec<u16>>) -> Self {
        Self {
            region,
            tag: tag.into(),
            ports,
        }
    }

    /// Whether this key belongs to the given (region, tag) pair,
    /// regardless of which port-spec variant it was cached under.
    pub fn matches_region_tag(&self, region: &Region, tag: &str) -> bool {
        self.region == *region && self.tag == tag
    }
}
