use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

mod common;
use common::{config_path, psplog};

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();

    psplog(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Configuration written to"));

    let content = fs::read_to_string(config_path(&dir)).unwrap();
    assert!(content.contains("encoding: utf-8"));
    assert!(content.contains("instructor: _"));
}

#[test]
fn test_init_keeps_existing_config_unless_forced() {
    let dir = tempdir().unwrap();
    fs::write(config_path(&dir), "name: Al\n").unwrap();

    psplog(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
    assert_eq!(fs::read_to_string(config_path(&dir)).unwrap(), "name: Al\n");

    psplog(&dir).args(["init", "--force"]).assert().success();
    assert!(!fs::read_to_string(config_path(&dir)).unwrap().contains("name: Al"));
}

#[test]
fn test_config_print_shows_effective_values() {
    let dir = tempdir().unwrap();
    fs::write(config_path(&dir), "team_mode: true\nheader:\n  language: Rust\n").unwrap();

    psplog(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(
            contains("team_mode: true")
                .and(contains("language: Rust"))
                .and(contains("line_ending: native")),
        );
}

#[test]
fn test_broken_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(config_path(&dir), "team_mode: [").unwrap();

    psplog(&dir)
        .args(["config", "--print"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Configuration error"));
}
