//! Teardown error types
//!
//! Teardown is not transactional: individual cleanup failures are
//! collected while the remaining resources and regions are still
//! attempted, then surfaced as a single aggregated error.

use tagsweep_cloud::{CloudError, Region};
use thiserror::Error;

/// Kind of resource a cleanup step was acting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A credential key pair, or the key-pair listing for a region
    KeyPair,
    /// A tag-named security group
    SecurityGroup,
    /// The post-destroy node listing used for region discovery
    Nodes,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::KeyPair => write!(f, "key pair"),
            ResourceKind::SecurityGroup => write!(f, "security group"),
            ResourceKind::Nodes => write!(f, "node listing"),
        }
    }
}

/// A single failed cleanup step, kept alongside its siblings that succeeded
#[derive(Debug)]
pub struct CleanupFailure {
    pub region: Region,
    pub kind: ResourceKind,
    pub name: String,
    pub source: CloudError,
}

impl CleanupFailure {
    pub fn new(
        region: Region,
        kind: ResourceKind,
        name: impl Into<String>,
        source: CloudError,
    ) -> Self {
        Self {
            region,
            kind,
            name: name.into(),
            source,
        }
    }
}

impl std::fmt::Display for CleanupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} '{}': {}",
            self.region, self.kind, self.name, self.source
        )
    }
}

fn render_failures(failures: &[CleanupFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Teardown errors
#[derive(Error, Debug)]
pub enum TeardownError {
    /// The generic node destroy step failed; cleanup was not attempted
    #[error("node destroy failed: {0}")]
    Destroy(#[source] CloudError),

    /// One or more cleanup steps failed while the rest were still attempted
    #[error("teardown incomplete: {}", render_failures(.failures))]
    Partial { failures: Vec<CleanupFailure> },
}

pub type Result<T> = std::result::Result<T, TeardownError>;
