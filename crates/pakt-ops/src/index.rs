//! The local package index: package manifests laid out on disk by name and
//! version, serving as the resolver's version provider.

use std::path::{Path, PathBuf};

use pakt_core::dependency::Dependency;
use pakt_core::manifest::Manifest;
use pakt_core::version::Version;
use pakt_core::MANIFEST_FILE;
use pakt_resolver::graph::DepGraph;
use pakt_resolver::provider::{ProviderError, VersionProvider};

/// Directory under the data directory holding indexed package manifests.
pub const INDEX_DIR: &str = "index";

/// A [`VersionProvider`] over `<data>/index/<name>/<version>/Pakt.toml`.
pub struct LocalIndex {
    root: PathBuf,
}

impl LocalIndex {
    /// The index under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join(INDEX_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of one indexed package version.
    pub fn package_dir(&self, name: &str, version: &Version) -> PathBuf {
        self.root.join(name).join(version.to_string())
    }
}

impl VersionProvider for LocalIndex {
    fn versions(&self, name: &str) -> Result<Vec<Version>, ProviderError> {
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| ProviderError::new(format!("cannot read {}: {e}", dir.display())))?;

        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| ProviderError::new(format!("cannot read {}: {e}", dir.display())))?;
            let file_name = entry.file_name();
            let Some(text) = file_name.to_str() else {
                continue;
            };
            // Stray files that don't parse as versions are not the index's.
            if let Ok(version) = Version::parse(text) {
                versions.push(version);
            }
        }
        // Best first: prefer the newest version.
        versions.sort_by(|a, b| b.cmp(a));
        Ok(versions)
    }

    fn graph_of(&self, name: &str, version: &Version) -> Result<DepGraph, ProviderError> {
        let path = self.package_dir(name, version).join(MANIFEST_FILE);
        let manifest = Manifest::from_path(&path)
            .map_err(|e| ProviderError::new(format!("{name} {version}: {e}")))?;
        let dependencies = manifest
            .dependencies()
            .map_err(|e| ProviderError::new(format!("{name} {version}: {e}")))?;

        let mut graph = DepGraph::new(Dependency::new(name));
        let head = graph.head();
        graph.node_mut(head).version = Some(version.clone());
        for dependency in dependencies {
            graph.add_child(head, dependency);
        }
        Ok(graph)
    }
}
