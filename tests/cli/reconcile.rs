use crate::cli::support::{blogline, create_channel, create_post, init_site, stdout_json};
use predicates::prelude::*;
use rusqlite::{params, Connection};
use std::path::Path;
use tempfile::tempdir;

/// Append a raw child row, bypassing the save hooks
fn inject_child(dir: &Path, channel: &str, target: i64, position: i64) {
    let conn = Connection::open(dir.join(".blogline/blogline.db")).unwrap();
    conn.execute(
        "INSERT INTO channel_children (channel_id, position, target_id, pinned) VALUES (?1, ?2, ?3, 0)",
        params![channel.parse::<i64>().unwrap(), position, target],
    )
    .unwrap();
}

#[test]
fn test_reconcile_removes_stale_and_duplicate_entries() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let post = create_post(dir.path(), "Real", &["--channel", &a]);
    inject_child(dir.path(), &a, 4242, 10);
    inject_child(dir.path(), &a, 4242, 11);
    inject_child(dir.path(), &a, post.parse().unwrap(), 12);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "reconcile"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["channels_checked"], 1);
    assert_eq!(json["changed"][0]["removed"], serde_json::json!([4242]));
    assert_eq!(json["changed"][0]["collapsed"], 1);
    assert_eq!(
        json["cache_tags"],
        serde_json::json!([format!("content:{}", a)])
    );

    blogline()
        .current_dir(dir.path())
        .args(["reconcile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 0"));
}

#[test]
fn test_reconcile_single_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let b = create_channel(dir.path(), "B");
    inject_child(dir.path(), &a, 900, 0);
    inject_child(dir.path(), &b, 901, 0);

    blogline()
        .current_dir(dir.path())
        .args(["reconcile", "--channel", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 1 channel(s), updated 1"));

    blogline()
        .current_dir(dir.path())
        .args(["channel", "show", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 901"));
}

#[test]
fn test_reconcile_unknown_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    blogline()
        .current_dir(dir.path())
        .args(["reconcile", "--channel", "77"])
        .assert()
        .code(3);
}

#[test]
fn test_reconcile_quiet_prints_only_ids() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    create_channel(dir.path(), "B");
    inject_child(dir.path(), &a, 777, 0);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--quiet", "reconcile"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{}\n", a));

    blogline()
        .current_dir(dir.path())
        .args(["--quiet", "reconcile"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
