//! Error handling integration tests for synccp CLI.
//!
//! Every copy failure is fatal: the process exits with status 1 and prints
//! the failing step's code on stderr.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_missing_source_fails() {
    let fx = TestFixture::new();
    let src = fx.path("nonexistent.txt");
    let dst = fx.path("destination.txt");

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[source_open]"))
        .stderr(predicate::str::contains("nonexistent.txt"));

    assert!(!dst.exists(), "destination must not be created");
}

#[test]
fn test_missing_source_keeps_existing_destination() {
    let fx = TestFixture::new();
    let src = fx.path("nonexistent.txt");
    let dst = fx.write("destination.txt", "untouched");

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src).arg(&dst).assert().failure();

    fx.assert_file_content(&dst, "untouched");
}

#[test]
fn test_default_source_missing() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.current_dir(fx.dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("source.txt"));

    assert!(!fx.path("destination.txt").exists());
}

#[test]
fn test_missing_destination_parent_fails() {
    let fx = TestFixture::new();
    let src = fx.write("source.txt", "hello");
    let dst = fx.path("no/such/dir/destination.txt");

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[destination_open]"));

    fx.assert_file_content(&src, "hello");
}

#[test]
fn test_destination_is_directory_fails() {
    let fx = TestFixture::new();
    let src = fx.write("source.txt", "hello");
    let dst = fx.path("subdir");
    std::fs::create_dir(&dst).unwrap();

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[destination_open]"));

    assert!(dst.is_dir());
}

#[test]
fn test_json_failure_record() {
    let fx = TestFixture::new();
    let src = fx.path("missing.txt");
    let dst = fx.path("out.txt");

    let mut cmd = cargo_bin_cmd!("synccp");
    let output = cmd
        .arg("--output")
        .arg("json")
        .arg(&src)
        .arg(&dst)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["outcome"], "failed");
    assert_eq!(record["error_code"], "source_open");
    assert!(
        record["error_message"]
            .as_str()
            .unwrap()
            .contains("missing.txt")
    );
}

#[test]
fn test_invalid_buffer_size_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg("--buffer-size")
        .arg("lots")
        .arg("a")
        .arg("b")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_failure_logged_at_default_level() {
    let fx = TestFixture::new();
    let src = fx.path("missing.txt");
    let dst = fx.path("out.txt");

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.env_remove("RUST_LOG")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .stderr(predicate::str::contains("copy aborted"))
        .stderr(predicate::str::contains("error[source_open]"));
}

#[test]
fn test_json_failure_record_not_device_full() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("synccp");
    let output = cmd
        .args(["--output", "json"])
        .arg(fx.path("missing.txt"))
        .arg(fx.path("out.txt"))
        .output()
        .unwrap();

    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["no_space"], false);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("hint:"));
}

/// `/dev/full` accepts the open and fails every write with ENOSPC.
#[cfg(target_os = "linux")]
#[test]
fn test_full_device_prints_hint() {
    let fx = TestFixture::new();
    let src = fx.write("source.txt", vec![b'z'; 100_000]);

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src)
        .arg("/dev/full")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[copy]"))
        .stderr(predicate::str::contains("hint: no space left"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_device_json_record() {
    let fx = TestFixture::new();
    let src = fx.write("source.txt", vec![b'z'; 100_000]);

    let mut cmd = cargo_bin_cmd!("synccp");
    let output = cmd
        .args(["--output", "json"])
        .arg(&src)
        .arg("/dev/full")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["outcome"], "failed");
    assert_eq!(record["error_code"], "copy");
    assert_eq!(record["no_space"], true);
}
