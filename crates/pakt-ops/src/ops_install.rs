//! Operation: resolve the project's dependencies against the local index
//! and install them into the current packset.

use std::path::Path;

use pakt_core::config::GlobalConfig;
use pakt_core::dependency::Dependency;
use pakt_core::manifest::Manifest;
use pakt_core::packset::Packset;
use pakt_core::version::{Constraint, ConstraintOperator, Version};
use pakt_core::MANIFEST_FILE;
use pakt_resolver::graph::DepGraph;
use pakt_resolver::resolver::{solve, SolveOptions};
use pakt_util::errors::PaktError;
use pakt_util::progress::{spinner, status, status_warn};

use crate::index::LocalIndex;

/// Resolve the dependencies declared in `Pakt.toml` under `project_root`,
/// print the assignment, and copy each resolved package into the current
/// packset's `src/` directory.
pub fn install(project_root: &Path, verbose: bool) -> miette::Result<()> {
    let manifest = Manifest::from_path(&project_root.join(MANIFEST_FILE))?;
    let mut graph = root_graph(&manifest)?;

    let data_dir = pakt_util::dirs_path();
    let index = LocalIndex::new(&data_dir);
    let options = SolveOptions {
        verbose,
        ..SolveOptions::default()
    };

    let sp = spinner("Resolving dependencies...");
    let outcome = solve(&mut graph, &index, &options);
    sp.finish_and_clear();

    let resolved = match outcome {
        Ok(resolved) => resolved,
        Err(e) => {
            if verbose {
                eprintln!("{graph}");
            }
            return Err(e.into());
        }
    };

    let config = GlobalConfig::load()?;
    let packset = Packset::new(&data_dir, &config.current_set);
    packset.ensure().map_err(PaktError::Io)?;

    for (name, version) in &resolved {
        status("Installing", &format!("{name} v{version}"));
        let target = packset.src_dir().join(name);
        if target.exists() {
            status_warn("Replacing", &target.display().to_string());
            std::fs::remove_dir_all(&target).map_err(PaktError::Io)?;
        }
        pakt_util::fs::copy_dir_all(&index.package_dir(name, version), &target)
            .map_err(PaktError::Io)?;
        println!("{name} {version}");
    }

    status(
        "Finished",
        &format!(
            "{} packages into packset '{}'",
            resolved.len(),
            packset.name()
        ),
    );
    Ok(())
}

/// The exploration graph for a manifest: the head carries the project's own
/// identity and bound version; its children are the declared dependencies.
pub fn root_graph(manifest: &Manifest) -> Result<DepGraph, PaktError> {
    let version = Version::parse(&manifest.package.version)?;
    let root = Dependency::with_constraints(
        &manifest.package.name,
        vec![Constraint::new(ConstraintOperator::Equal, version.clone())],
    );
    let mut graph = DepGraph::new(root);
    let head = graph.head();
    graph.node_mut(head).version = Some(version);
    for dependency in manifest.dependencies()? {
        graph.add_child(head, dependency);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_graph_shape() {
        let manifest = Manifest::parse_toml(
            r#"
dependencies = ["apple =1.0.0", "banana"]

[package]
name = "fruitbowl"
version = "1.0.0"
"#,
        )
        .unwrap();
        let graph = root_graph(&manifest).unwrap();
        let head = graph.head();
        assert_eq!(graph.node(head).dependency.to_string(), "fruitbowl =1.0.0");
        assert_eq!(graph.node(head).version, Some(Version::new(1, 0, 0)));
        assert_eq!(graph.child_count(head), 2);
        assert_eq!(graph.node(graph.child(head, 1)).dependency.name, "banana");
    }

    #[test]
    fn root_graph_rejects_bad_version() {
        let manifest = Manifest::parse_toml(
            r#"
[package]
name = "broken"
version = "not-a-version"
"#,
        )
        .unwrap();
        assert!(root_graph(&manifest).is_err());
    }
}
