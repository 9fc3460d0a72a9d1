//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_diskspace_command;

#[test]
fn test_conflicting_sizes() {
    no_cfg_diskspace_command()
        .args(["--content_size", "1", "--diff_size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_biggest_file_requires_diff() {
    no_cfg_diskspace_command()
        .args(["--biggest_file", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--diff_size"));
}

#[test]
fn test_negative_size() {
    // This test should auto fail due to how clap works
    no_cfg_diskspace_command()
        .args(["--content_size", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_large_reserve() {
    no_cfg_diskspace_command()
        .args(["--reserve", "18446744073709551616"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help() {
    no_cfg_diskspace_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Space Check Options"));
}

#[test]
fn test_missing_explicit_config() {
    crate::util::diskspace_command(&["-C", "./tests/valid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}
