//! Permission mode integration tests for synccp CLI.

#![cfg(unix)]

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, mode_of};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_hello_0644() {
    let fx = TestFixture::new();
    let src = fx.write_with_mode("source.txt", "hello", 0o644);

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.current_dir(fx.dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mode 0644"));

    let dst = fx.path("destination.txt");
    fx.assert_file_content(&dst, "hello");
    assert_eq!(mode_of(&dst), 0o644);
    assert_eq!(mode_of(&src), 0o644);
}

#[test]
fn test_executable_mode_preserved() {
    let fx = TestFixture::new();
    let src = fx.write_with_mode("run.sh", "#!/bin/sh\n", 0o755);
    let dst = fx.path("run.copy");

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src).arg(&dst).assert().success();

    assert_eq!(mode_of(&dst), 0o755);
}

#[test]
fn test_existing_destination_mode_replaced() {
    let fx = TestFixture::new();
    let src = fx.write_with_mode("private.txt", "secret", 0o600);
    let dst = fx.write_with_mode("public.txt", "everyone can read this", 0o777);

    let mut cmd = cargo_bin_cmd!("synccp");
    cmd.arg(&src).arg(&dst).assert().success();

    fx.assert_file_content(&dst, "secret");
    assert_eq!(mode_of(&dst), 0o600);
}

#[test]
fn test_json_reports_mode() {
    let fx = TestFixture::new();
    let src = fx.write_with_mode("source.txt", "x", 0o640);
    let dst = fx.path("destination.txt");

    let mut cmd = cargo_bin_cmd!("synccp");
    let output = cmd
        .args(["--output", "json"])
        .arg(&src)
        .arg(&dst)
        .output()
        .unwrap();

    assert!(output.status.success());
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["mode"], "0640");
    assert_eq!(mode_of(&dst), 0o640);
}
