//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::diskspace_command;

#[test]
fn test_toml_mismatch_type() {
    diskspace_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_key() {
    diskspace_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_negative_reserve() {
    diskspace_command(&["-C", "./tests/invalid_configs/negative_reserve.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_key() {
    diskspace_command(&["-C", "./tests/invalid_configs/duplicate_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}
