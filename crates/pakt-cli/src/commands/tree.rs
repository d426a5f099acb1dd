use miette::Result;

use pakt_ops::ops_tree::TreeOptions;

pub fn exec(resolve: bool, verbose: bool) -> Result<()> {
    let root = super::project_root()?;
    pakt_ops::ops_tree::tree(&root, &TreeOptions { resolve, verbose })
}
