use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn pakt_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pakt").unwrap();
    cmd.env("PAKT_HOME", home.path());
    cmd
}

fn publish(home: &Path, name: &str, version: &str, dependencies: &[&str]) {
    let dir = home.join("index").join(name).join(version);
    std::fs::create_dir_all(&dir).unwrap();
    let deps = dependencies
        .iter()
        .map(|d| format!("{d:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    std::fs::write(
        dir.join("Pakt.toml"),
        format!(
            "dependencies = [{deps}]\n\n[package]\nname = {name:?}\nversion = {version:?}\n"
        ),
    )
    .unwrap();
}

fn fruit_index(home: &Path) {
    publish(home, "apple", "1.0.0", &[]);
    publish(home, "apple", "0.0.1", &["durian >=0.0.1"]);
    publish(home, "banana", "1.0.0", &[]);
    publish(home, "banana", "0.0.1", &["durian <0.0.5"]);
    publish(home, "durian", "1.0.0", &[]);
    publish(home, "durian", "0.0.5", &[]);
    publish(home, "durian", "0.0.1", &[]);
}

fn write_project(dir: &Path, dependencies: &[&str]) {
    let deps = dependencies
        .iter()
        .map(|d| format!("{d:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    std::fs::write(
        dir.join("Pakt.toml"),
        format!("dependencies = [{deps}]\n\n[package]\nname = \"fruitbowl\"\nversion = \"1.0.0\"\n"),
    )
    .unwrap();
}

#[test]
fn test_install_resolves_and_populates_packset() {
    let home = TempDir::new().unwrap();
    fruit_index(home.path());

    let project = TempDir::new().unwrap();
    write_project(project.path(), &["apple 0.0.1", "banana 0.0.1"]);

    pakt_cmd(&home)
        .current_dir(project.path())
        .args(["install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple 0.0.1"))
        .stdout(predicate::str::contains("banana 0.0.1"))
        .stdout(predicate::str::contains("durian 0.0.1"));

    let src = home.path().join("packsets/default/src");
    for name in ["apple", "banana", "durian"] {
        assert!(
            src.join(name).join("Pakt.toml").is_file(),
            "{name} not installed"
        );
    }
}

#[test]
fn test_install_honors_current_packset() {
    let home = TempDir::new().unwrap();
    fruit_index(home.path());

    pakt_cmd(&home).args(["use", "sandbox"]).assert().success();

    let project = TempDir::new().unwrap();
    write_project(project.path(), &["durian"]);

    pakt_cmd(&home)
        .current_dir(project.path())
        .args(["install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("durian 1.0.0"));

    assert!(home
        .path()
        .join("packsets/sandbox/src/durian/Pakt.toml")
        .is_file());
}

#[test]
fn test_install_unsolvable_fails() {
    let home = TempDir::new().unwrap();
    fruit_index(home.path());

    let project = TempDir::new().unwrap();
    write_project(project.path(), &["apple =2.0.0"]);

    pakt_cmd(&home)
        .current_dir(project.path())
        .args(["install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no versions satisfy"));
}

#[test]
fn test_install_without_manifest_fails() {
    let home = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();

    pakt_cmd(&home)
        .current_dir(empty.path())
        .args(["install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Pakt.toml"));
}

#[test]
fn test_tree_prints_constraints() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_project(project.path(), &["apple =1.0.0", "banana >=0.0.2"]);

    pakt_cmd(&home)
        .current_dir(project.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fruitbowl 1.0.0 (=1.0.0)"))
        .stdout(predicate::str::contains("├─ apple (=1.0.0)"))
        .stdout(predicate::str::contains("└─ banana (>=0.0.2)"));
}

#[test]
fn test_tree_resolve_annotates_versions() {
    let home = TempDir::new().unwrap();
    fruit_index(home.path());

    let project = TempDir::new().unwrap();
    write_project(project.path(), &["apple 0.0.1"]);

    pakt_cmd(&home)
        .current_dir(project.path())
        .args(["tree", "--resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└─┬ apple 0.0.1 (=0.0.1)"))
        .stdout(predicate::str::contains("└─ durian 1.0.0 (>=0.0.1)"));
}
