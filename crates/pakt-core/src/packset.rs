//! Packset directory layout.
//!
//! A packset is a named subdirectory of the pakt data directory under which
//! resolved packages are installed. Installed sources live in its `src/`
//! root, so switching packsets swaps the whole installed world at once.

use std::path::{Path, PathBuf};

/// Directory under the data directory holding all packsets.
pub const PACKSETS_DIR: &str = "packsets";

/// Subdirectory of a packset holding installed package sources.
pub const SRC_DIR: &str = "src";

/// A named packset rooted in a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packset {
    name: String,
    dir: PathBuf,
}

impl Packset {
    /// A packset named `name` under `data_dir`.
    pub fn new(data_dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: data_dir.join(PACKSETS_DIR).join(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where installed package sources live.
    pub fn src_dir(&self) -> PathBuf {
        self.dir.join(SRC_DIR)
    }

    /// Create the packset directories if missing. Returns `true` if the
    /// packset had to be created.
    pub fn ensure(&self) -> std::io::Result<bool> {
        pakt_util::fs::ensure_dir(&self.src_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let ps = Packset::new(Path::new("/data"), "work");
        assert_eq!(ps.name(), "work");
        assert_eq!(ps.dir(), Path::new("/data/packsets/work"));
        assert_eq!(ps.src_dir(), Path::new("/data/packsets/work/src"));
    }

    #[test]
    fn ensure_creates_and_reports() {
        let tmp = tempfile::TempDir::new().unwrap();
        let ps = Packset::new(tmp.path(), "fresh");
        assert!(ps.ensure().unwrap());
        assert!(ps.src_dir().is_dir());
        assert!(!ps.ensure().unwrap());
    }
}
