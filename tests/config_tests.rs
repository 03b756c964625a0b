//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::rhiz_tag_cmd;

#[test]
fn test_config_get_defaults() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("clock")
        .assert()
        .success()
        .stdout(predicate::str::contains("utc"));

    // Reading never creates the file
    assert!(!temp.path().join(".rhiz-tag").exists());
}

#[test]
fn test_config_set_creates_file() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("suffix")
        .arg("false")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set suffix = false"));

    let content = fs::read_to_string(temp.path().join(".rhiz-tag/config.toml")).unwrap();
    assert!(content.contains("suffix = false"));
}

#[test]
fn test_config_set_then_get() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("clock")
        .arg("local")
        .assert()
        .success();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("clock")
        .assert()
        .success()
        .stdout(predicate::str::contains("local"));
}

#[test]
fn test_config_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("notes").join("2024");
    fs::create_dir_all(&nested).unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("time_format")
        .arg("%H:%M")
        .assert()
        .success();

    rhiz_tag_cmd()
        .current_dir(&nested)
        .arg("config")
        .arg("time_format")
        .assert()
        .success()
        .stdout(predicate::str::contains("%H:%M"));
}

#[test]
fn test_config_env_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("elsewhere.toml");

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .env("RHIZ_TAG_CONFIG", &path)
        .arg("config")
        .arg("suffix")
        .arg("false")
        .assert()
        .success();

    assert!(path.exists());
    assert!(!temp.path().join(".rhiz-tag").exists());
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("clock = utc"))
        .stdout(predicate::str::contains("suffix = true"))
        .stdout(predicate::str::contains("time_format = %Y-%m-%d %H:%M:%S"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("colour")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: 'colour'"));
}

#[test]
fn test_config_invalid_value_fails() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("clock")
        .arg("mars")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid clock"));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = TempDir::new().unwrap();

    rhiz_tag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rhiz-tag config"))
        .stdout(predicate::str::contains("Valid keys"));
}
