use miette::Result;

use pakt_util::errors::PaktError;

pub fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(PaktError::Io)?;
    pakt_ops::ops_init::init(&cwd)
}
