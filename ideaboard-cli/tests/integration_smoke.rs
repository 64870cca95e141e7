//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("ideaboard").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("ideaboard").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL connection string"))
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_serve_fails_without_usable_database() {
    let mut cmd = Command::cargo_bin("ideaboard").unwrap();
    cmd.arg("serve")
        .arg("--database-url")
        .arg("not-a-database-url")
        .arg("--bind")
        .arg("127.0.0.1:0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("ideaboard").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
