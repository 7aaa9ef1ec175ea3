//! Collaborator traits for provider-side operations
//!
//! Teardown consumes these seams; concrete providers (and the in-memory
//! double used in tests) implement them. Retry/backoff policy belongs to
//! the implementations — callers only interpret the results.

use crate::error::Result;
use crate::model::{KeyPair, Node, Region, SecurityGroup};
use async_trait::async_trait;

/// Node listing and multi-node destroy operations.
///
/// `destroy_nodes_with_tag` terminates every node carrying the tag across
/// all regions; per-node failure handling is owned by the implementation.
#[async_trait]
pub trait NodeStrategy: Send + Sync {
    /// List all nodes carrying the tag, including recently terminated ones
    async fn list_nodes_with_tag(&self, tag: &str) -> Result<Vec<Node>>;

    /// Terminate every node carrying the tag
    async fn destroy_nodes_with_tag(&self, tag: &str) -> Result<()>;
}

/// Provider key-pair service scoped by region
#[async_trait]
pub trait KeyPairService: Send + Sync {
    /// List every key pair present in the region (no remote filtering)
    async fn list_key_pairs(&self, region: &Region) -> Result<Vec<KeyPair>>;

    /// Delete a key pair by name.
    ///
    /// Fails with [`CloudError::ResourceNotFound`](crate::CloudError) if
    /// the name does not exist in the region.
    async fn delete_key_pair(&self, region: &Region, name: &str) -> Result<()>;
}

/// Provider security-group service scoped by region
#[async_trait]
pub trait SecurityGroupService: Send + Sync {
    /// List security groups matching the exact name, possibly empty
    async fn list_security_groups(
        &self,
        region: &Region,
        name: &str,
    ) -> Result<Vec<SecurityGroup>>;

    /// Delete the security group with the given name
    async fn delete_security_group(&self, region: &Region, name: &str) -> Result<()>;
}
