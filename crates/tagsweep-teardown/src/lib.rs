//! Tagsweep teardown core
//!
//! Coordinates the multi-resource, multi-region teardown of a tagged
//! node group: the generic node destroy is delegated to the provider,
//! the regions the nodes occupied are derived from the post-destroy
//! listing, and each region's auxiliary resources (credential key pairs
//! named `<tag>-<n>`, the security group named `<tag>`) are removed
//! together with their local cache entries.
//!
//! Teardown is safely re-runnable: absent resources are no-ops, and
//! individual failures are collected into one aggregated error while
//! every other reachable cleanup step is still attempted.

pub mod error;
pub mod keypair;
pub mod region;
pub mod registry;
pub mod secgroup;
pub mod teardown;

// Re-exports
pub use error::{CleanupFailure, ResourceKind, Result, TeardownError};
pub use keypair::KeyPairCleaner;
pub use region::RegionResolver;
pub use registry::{CredentialStore, SecurityGroupStore};
pub use secgroup::SecurityGroupCleaner;
pub use teardown::TeardownOrchestrator;
