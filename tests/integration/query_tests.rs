//! End-to-end queries through the binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_diskspace_command;

const MISSING: &str = "/this/path/does/not/exist-xyz123";

#[cfg(unix)]
#[test]
fn test_root() {
    let output = no_cfg_diskspace_command().arg("/").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (bytes, path) = stdout.trim_end().split_once('\t').unwrap();

    assert_eq!(path, "/");
    assert!(bytes.parse::<u64>().unwrap() > 0);
}

#[test]
fn test_missing_path() {
    no_cfg_diskspace_command()
        .arg(MISSING)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unable to query free space"))
        .stderr(predicate::str::contains(MISSING));
}

#[test]
fn test_empty_path() {
    no_cfg_diskspace_command()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to query free space"));
}

#[test]
fn test_partial_failure_still_reports() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    no_cfg_diskspace_command()
        .args([dir_str, MISSING])
        .assert()
        .failure()
        .stdout(predicate::str::contains(dir_str))
        .stderr(predicate::str::contains(MISSING));
}

#[test]
fn test_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-downloaded-yet.zip");
    let file_str = file.to_str().unwrap();

    no_cfg_diskspace_command()
        .arg(file_str)
        .assert()
        .failure();

    no_cfg_diskspace_command()
        .args(["--file", file_str])
        .assert()
        .success()
        .stdout(predicate::str::contains(file_str));
}

#[test]
fn test_content_check() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    no_cfg_diskspace_command()
        .args(["--content_size", "0", "--reserve", "0", dir_str])
        .assert()
        .success();

    no_cfg_diskspace_command()
        .args(["--content_size", "9223372036854775807", dir_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough disk space"));
}

#[test]
fn test_diff_check() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    no_cfg_diskspace_command()
        .args(["--diff_size", "1", "--biggest_file", "1", dir_str])
        .assert()
        .success();

    no_cfg_diskspace_command()
        .args(["--diff_size", "1", "--biggest_file", "18446744073709551615", dir_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required disk space 18446744073709551615"));
}
