use crate::cli::support::{blogline, create_channel, create_post, init_site, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_site() {
    let dir = tempdir().unwrap();

    blogline()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized blogline site"));

    assert!(dir.path().join(".blogline/config.toml").exists());
    assert!(dir.path().join(".blogline/blogline.db").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    blogline().current_dir(dir.path()).arg("init").assert().success();
    blogline().current_dir(dir.path()).arg("init").assert().success();
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();

    blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));
}

#[test]
fn test_explicit_site_path() {
    let dir = tempdir().unwrap();

    blogline()
        .current_dir(dir.path())
        .args(["--site", "content-site", "init"])
        .assert()
        .success();
    assert!(dir.path().join("content-site/config.toml").exists());

    blogline()
        .current_dir(dir.path())
        .args(["--site", "content-site", "channel", "create", "News"])
        .assert()
        .success();
}

#[test]
fn test_discovery_from_subdirectory() {
    let dir = tempdir().unwrap();
    blogline().current_dir(dir.path()).arg("init").assert().success();
    let nested = dir.path().join("drafts/2024");
    std::fs::create_dir_all(&nested).unwrap();

    blogline()
        .current_dir(&nested)
        .args(["channel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No channels"));
}

#[test]
fn test_reinit_reports_existing_content() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "News");
    create_post(dir.path(), "Hello", &["--channel", &a]);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["channels"], 1);
    assert_eq!(json["posts"], 1);

    blogline()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 channel(s), 1 post(s)"));
}
