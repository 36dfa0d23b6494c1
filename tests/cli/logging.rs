use crate::cli::support::blogline;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    blogline().current_dir(dir.path()).arg("init").assert().success();

    blogline()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BLOGLINE_LOG")
        .args(["--log-level", "debug", "channel", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    blogline().current_dir(dir.path()).arg("init").assert().success();

    blogline()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BLOGLINE_LOG")
        .args(["channel", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    blogline().current_dir(dir.path()).arg("init").assert().success();

    blogline()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BLOGLINE_LOG")
        .args(["--verbose", "--log-json", "channel", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}
