use crate::cli::support::{blogline, create_channel, create_post, init_site, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_post_create_uses_only_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let channel = create_channel(dir.path(), "Only");
    let post = create_post(dir.path(), "Auto placed", &[]);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "post", "show", &post])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["post"]["parent_channel"].to_string(), channel);
    assert_eq!(json["url"], "/blog/auto-placed");
    assert_eq!(json["shows_page_header"], false);
}

#[test]
fn test_post_create_without_default_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    create_channel(dir.path(), "One");
    create_channel(dir.path(), "Two");
    let post = create_post(dir.path(), "Loose", &[]);

    blogline()
        .current_dir(dir.path())
        .args(["post", "show", &post])
        .assert()
        .success()
        .stdout(predicate::str::contains("channel: (none)"));
}

#[test]
fn test_post_create_unknown_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    blogline()
        .current_dir(dir.path())
        .args(["post", "create", "Orphan", "--channel", "40"])
        .assert()
        .code(3);
}

#[test]
fn test_post_move_updates_both_channels() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let b = create_channel(dir.path(), "B");
    let post = create_post(dir.path(), "Traveller", &["--channel", &a]);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "post", "move", &post, "--channel", &b])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["written"].as_array().unwrap().len(), 2);

    blogline()
        .current_dir(dir.path())
        .args(["channel", "show", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("children: (none)"));
    blogline()
        .current_dir(dir.path())
        .args(["channel", "show", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("- {}", post)));
}

#[test]
fn test_post_move_requires_target() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    blogline()
        .current_dir(dir.path())
        .args(["post", "move", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_post_detach() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let post = create_post(dir.path(), "Leaving", &["--channel", &a]);

    blogline()
        .current_dir(dir.path())
        .args(["post", "move", &post, "--detach"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("updated channel {}", a)));

    blogline()
        .current_dir(dir.path())
        .args(["children", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("No visible posts"));
}

#[test]
fn test_unpublish_hides_from_children() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    create_post(dir.path(), "Visible", &["--channel", &a]);
    let hidden = create_post(dir.path(), "Hidden", &["--channel", &a]);

    blogline()
        .current_dir(dir.path())
        .args(["post", "unpublish", &hidden])
        .assert()
        .success();

    blogline()
        .current_dir(dir.path())
        .args(["children", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visible"))
        .stdout(predicate::str::contains("Hidden").not());

    blogline()
        .current_dir(dir.path())
        .args(["post", "publish", &hidden])
        .assert()
        .success();

    blogline()
        .current_dir(dir.path())
        .args(["children", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidden"));
}

fn tag_list(json: &serde_json::Value) -> Vec<String> {
    json["cache_tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_status_and_delete_json_list_sibling_tags() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let first = create_post(dir.path(), "First", &["--channel", &a]);
    let second = create_post(dir.path(), "Second", &["--channel", &a]);

    for verb in ["unpublish", "publish"] {
        let output = blogline()
            .current_dir(dir.path())
            .args(["--format", "json", "post", verb, &second])
            .output()
            .unwrap();
        assert!(output.status.success());
        let tags = tag_list(&stdout_json(&output));
        for id in [&a, &first, &second] {
            assert!(tags.contains(&format!("content:{}", id)), "{verb}: {tags:?}");
        }
    }

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "post", "delete", &second])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tags = tag_list(&stdout_json(&output));
    for id in [&a, &first, &second] {
        assert!(tags.contains(&format!("content:{}", id)), "delete: {tags:?}");
    }
}

#[test]
fn test_post_delete_cleans_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let post = create_post(dir.path(), "Short lived", &["--channel", &a]);

    blogline()
        .current_dir(dir.path())
        .args(["post", "delete", &post])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted post"));

    blogline()
        .current_dir(dir.path())
        .args(["channel", "show", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("children: (none)"));

    blogline()
        .current_dir(dir.path())
        .args(["post", "show", &post])
        .assert()
        .code(3);
}

#[test]
fn test_post_create_custom_alias() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let post = create_post(
        dir.path(),
        "Annual report",
        &["--channel", &a, "--alias", "/reports/2024"],
    );

    blogline()
        .current_dir(dir.path())
        .args(["post", "show", &post])
        .assert()
        .success()
        .stdout(predicate::str::contains("url: /reports/2024"));

    blogline()
        .current_dir(dir.path())
        .args(["post", "create", "Bad", "--alias", "reports/bad"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("url alias must start with '/'"));
}
