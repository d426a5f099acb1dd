use std::path::{Path, PathBuf};

/// Search `start` and its ancestors for the nearest directory holding a
/// file named `marker` (typically `Pakt.toml`, to locate the project root
/// from wherever inside it pakt was invoked). `None` when no ancestor has
/// one.
pub fn find_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent())
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Ensure a directory exists, creating it and any parents if needed.
/// Returns `true` if the directory had to be created.
pub fn ensure_dir(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}

/// Recursively copy the contents of `from` into `to`, creating `to` first.
pub fn copy_dir_all(from: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
