//! Command dispatch and handler modules.

mod init;
mod install;
mod tree;
mod use_;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Use { name } => use_::exec(name.as_deref()),
        Command::Install => install::exec(cli.verbose),
        Command::Tree { resolve } => tree::exec(resolve, cli.verbose),
    }
}

/// Locate the project root: the nearest ancestor containing `Pakt.toml`.
fn project_root() -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir().map_err(pakt_util::errors::PaktError::Io)?;
    pakt_util::fs::find_ancestor_with(&cwd, pakt_core::MANIFEST_FILE).ok_or_else(|| {
        pakt_util::errors::PaktError::Generic {
            message: format!(
                "Could not find {} in this directory or any parent",
                pakt_core::MANIFEST_FILE
            ),
        }
        .into()
    })
}
