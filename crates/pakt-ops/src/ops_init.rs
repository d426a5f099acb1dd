//! Operation: scaffold a `Pakt.toml` in the working directory.

use std::path::Path;

use dialoguer::Input;

use pakt_core::manifest::Manifest;
use pakt_core::MANIFEST_FILE;
use pakt_util::errors::PaktError;

/// Create `Pakt.toml` in `dir`, prompting for package details when the
/// terminal is attended and taking the defaults otherwise. Refuses to
/// overwrite an existing manifest.
pub fn init(dir: &Path) -> miette::Result<()> {
    scaffold(dir, console::user_attended())
}

fn scaffold(dir: &Path, interactive: bool) -> miette::Result<()> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return Err(PaktError::Generic {
            message: format!("{MANIFEST_FILE} already exists in this directory"),
        }
        .into());
    }

    let default_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my-package")
        .to_string();

    let mut manifest = Manifest::new(&default_name);
    if interactive {
        println!("Creating initial {MANIFEST_FILE}...");
        manifest.package.name = prompt("Name", &default_name)?;
        let version = manifest.package.version.clone();
        manifest.package.version = prompt("Version", &version)?;
        manifest.package.import_path = optional(prompt("Import Path", "")?);
        manifest.package.summary = optional(prompt("Summary", "")?);
        manifest.package.description = optional(prompt("Description", "")?);
        manifest.package.homepage = optional(prompt("Homepage", "")?);
        let license = manifest.package.license.clone();
        manifest.package.license = prompt("License", &license)?;
    }

    manifest.write_to(&manifest_path)?;
    println!("Created {}", manifest_path.display());
    Ok(())
}

/// Ask for one value, offering `default` when non-empty.
fn prompt(label: &str, default: &str) -> miette::Result<String> {
    Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .show_default(!default.is_empty())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| {
            PaktError::Generic {
                message: format!("prompt failed: {e}"),
            }
            .into()
        })
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
