//! Tagsweep cloud abstraction
//!
//! This crate defines the domain model and provider seams that the
//! teardown core is built on: compute nodes grouped by an opaque tag,
//! the region-scoped auxiliary resources provisioned alongside them
//! (credential key pairs, security groups), and the composite keys used
//! to cache those resources locally.
//!
//! Concrete cloud providers implement the traits in [`provider`]; the
//! teardown orchestrator in `tagsweep-teardown` consumes them.

pub mod error;
pub mod model;
pub mod provider;

// Re-exports
pub use error::{CloudError, Result};
pub use model::{KeyPair, Node, NodeState, PortsRegionTag, Region, RegionTag, SecurityGroup};
pub use provider::{KeyPairService, NodeStrategy, SecurityGroupService};
