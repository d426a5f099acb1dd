use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn pakt_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pakt").unwrap();
    cmd.env("PAKT_HOME", home.path());
    cmd
}

#[test]
fn test_init_scaffolds_manifest_with_defaults() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("fruitbowl");
    std::fs::create_dir(&project).unwrap();

    // stdin is not a terminal here, so init takes the defaults.
    pakt_cmd(&home)
        .current_dir(&project)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let manifest = std::fs::read_to_string(project.join("Pakt.toml")).unwrap();
    assert!(manifest.contains(r#"name = "fruitbowl""#), "got: {manifest}");
    assert!(manifest.contains(r#"license = "MIT""#), "got: {manifest}");
}

#[test]
fn test_init_refuses_existing_manifest() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Pakt.toml"), "").unwrap();

    pakt_cmd(&home)
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
