//! The capability abstraction over the package repository.

use thiserror::Error;

use pakt_core::version::Version;

use crate::graph::DepGraph;

/// Failure raised by a [`VersionProvider`] implementation. Propagated out of
/// the resolver unretried.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Enumerates available versions of packages and retrieves their dependency
/// graphs at specific versions.
pub trait VersionProvider {
    /// Candidate versions of `name`, best first: index 0 is the preferred
    /// choice and the resolver treats the order as authoritative. An empty
    /// list is permitted and yields a conflict for that package.
    fn versions(&self, name: &str) -> Result<Vec<Version>, ProviderError>;

    /// The dependency graph of `name` at exactly `version`. The returned
    /// head binds that pair; its children are the package's direct
    /// dependencies at that version. Must succeed for every version
    /// returned by [`versions`](Self::versions).
    fn graph_of(&self, name: &str, version: &Version) -> Result<DepGraph, ProviderError>;
}
