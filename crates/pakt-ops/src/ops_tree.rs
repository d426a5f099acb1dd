//! Operation: display the project's dependency tree.

use std::path::Path;

use pakt_core::manifest::Manifest;
use pakt_core::MANIFEST_FILE;
use pakt_resolver::resolver::{solve, SolveOptions};

use crate::index::LocalIndex;
use crate::ops_install::root_graph;

/// Options for `pakt tree`.
#[derive(Default)]
pub struct TreeOptions {
    /// Resolve against the local index first, annotating every node with
    /// its chosen version.
    pub resolve: bool,
    pub verbose: bool,
}

/// Print the dependency tree for the project at `project_root`.
pub fn tree(project_root: &Path, opts: &TreeOptions) -> miette::Result<()> {
    let manifest = Manifest::from_path(&project_root.join(MANIFEST_FILE))?;
    let mut graph = root_graph(&manifest)?;

    if opts.resolve {
        let index = LocalIndex::new(&pakt_util::dirs_path());
        let options = SolveOptions {
            verbose: opts.verbose,
            ..SolveOptions::default()
        };
        solve(&mut graph, &index, &options)?;
    }

    println!("{graph}");
    Ok(())
}
