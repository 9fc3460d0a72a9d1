//! Checks that valid config files are picked up and merged with arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::diskspace_command;

#[test]
fn test_empty_config() {
    diskspace_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\t\.\n$").unwrap());
}

#[cfg(unix)]
#[test]
fn test_config_paths() {
    diskspace_command(&["-C", "./tests/valid_configs/root_path.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\t/\n$").unwrap());
}

#[cfg(unix)]
#[test]
fn test_all_flags() {
    diskspace_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\t\d+\t\d+\t/\n$").unwrap());
}

#[test]
fn test_arguments_override_config_paths() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    diskspace_command(&["-C", "./tests/valid_configs/root_path.toml", dir_str])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!("\t{dir_str}\n")));
}
