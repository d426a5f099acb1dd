use miette::Result;

pub fn exec(verbose: bool) -> Result<()> {
    let root = super::project_root()?;
    pakt_ops::ops_install::install(&root, verbose)
}
