use pakt_util::fs::{copy_dir_all, ensure_dir, find_ancestor_with};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Pakt.toml"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "Pakt.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Pakt.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "Pakt.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    assert!(ensure_dir(&deep).unwrap());
    assert!(deep.is_dir());
}

#[test]
fn test_copy_dir_all_copies_tree() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    std::fs::create_dir_all(src.join("nested")).unwrap();
    std::fs::write(src.join("top.txt"), "top").unwrap();
    std::fs::write(src.join("nested").join("deep.txt"), "deep").unwrap();

    let dst = tmp.path().join("dst");
    copy_dir_all(&src, &dst).unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
    assert_eq!(
        std::fs::read_to_string(dst.join("nested").join("deep.txt")).unwrap(),
        "deep"
    );
}

#[test]
fn test_ensure_dir_reports_existing() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("already");
    std::fs::create_dir(&dir).unwrap();
    assert!(!ensure_dir(&dir).unwrap());
    assert!(dir.is_dir());
}
