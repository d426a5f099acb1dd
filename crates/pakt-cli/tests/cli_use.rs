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
fn test_use_without_name_prints_default() {
    let home = TempDir::new().unwrap();

    pakt_cmd(&home)
        .args(["use"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_use_creates_and_switches() {
    let home = TempDir::new().unwrap();

    pakt_cmd(&home)
        .args(["use", "experiments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new packset: experiments"))
        .stdout(predicate::str::contains(
            "Switched current packset to: experiments",
        ));

    assert!(home.path().join("packsets/experiments/src").is_dir());
    assert!(home.path().join("config.toml").is_file());

    pakt_cmd(&home)
        .args(["use"])
        .assert()
        .success()
        .stdout(predicate::str::contains("experiments"));
}

#[test]
fn test_use_existing_does_not_recreate() {
    let home = TempDir::new().unwrap();

    pakt_cmd(&home).args(["use", "work"]).assert().success();

    pakt_cmd(&home)
        .args(["use", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new packset").not())
        .stdout(predicate::str::contains("Switched current packset to: work"));
}
