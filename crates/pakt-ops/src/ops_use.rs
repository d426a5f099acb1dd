//! Operation: show or switch the current packset.

use pakt_core::config::GlobalConfig;
use pakt_core::packset::Packset;
use pakt_util::errors::PaktError;

/// With no name, print the current packset. With a name, persist it as
/// current and create its directories if necessary.
pub fn use_packset(name: Option<&str>) -> miette::Result<()> {
    let mut config = GlobalConfig::load()?;

    let Some(name) = name else {
        println!("{}", config.current_set);
        return Ok(());
    };

    config.current_set = name.to_string();
    let packset = Packset::new(&pakt_util::dirs_path(), name);
    let created = packset.ensure().map_err(PaktError::Io)?;
    config.save()?;

    if created {
        println!("Created new packset: {name}");
    }
    println!("Switched current packset to: {name}");
    Ok(())
}
