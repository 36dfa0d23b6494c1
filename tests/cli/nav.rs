use crate::cli::support::{blogline, create_channel, create_post, init_site, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nav_by_date() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "Diary");
    // Created out of date order
    create_post(dir.path(), "Third", &["--channel", &a, "--date", "2024-01-03"]);
    create_post(dir.path(), "First", &["--channel", &a, "--date", "2024-01-01"]);
    let second = create_post(dir.path(), "Second", &["--channel", &a, "--date", "2024-01-02"]);

    blogline()
        .current_dir(dir.path())
        .args(["nav", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous: First </blog/first>"))
        .stdout(predicate::str::contains("Next: Third </blog/third>"));
}

#[test]
fn test_nav_same_day_uses_creation_order() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "Busy day");
    let ids: Vec<String> = ["One", "Two", "Three"]
        .iter()
        .map(|title| create_post(dir.path(), title, &["--channel", &a, "--date", "2024-07-04"]))
        .collect();

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "nav", &ids[1]])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["navigation"]["previous_title"], "One");
    assert_eq!(json["navigation"]["next_title"], "Three");
    assert_eq!(json["strategy"], "by-date");

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "nav", &ids[2]])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["navigation"]["next_title"], "");
    assert_eq!(json["navigation"]["next_url"], "");
}

#[test]
fn test_nav_does_not_cross_channels() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    let b = create_channel(dir.path(), "B");
    let a1 = create_post(dir.path(), "A one", &["--channel", &a, "--date", "2024-02-01"]);
    create_post(dir.path(), "B one", &["--channel", &b, "--date", "2024-02-02"]);
    create_post(dir.path(), "A two", &["--channel", &a, "--date", "2024-02-03"]);

    blogline()
        .current_dir(dir.path())
        .args(["nav", &a1])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next: A two"))
        .stdout(predicate::str::contains("Previous: (none)"));
}

#[test]
fn test_nav_list_order_strategy() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let a = create_channel(dir.path(), "A");
    // List order is insertion order here, not date order
    create_post(dir.path(), "Late", &["--channel", &a, "--date", "2024-09-09"]);
    let early = create_post(dir.path(), "Early", &["--channel", &a, "--date", "2024-01-01"]);

    blogline()
        .current_dir(dir.path())
        .args(["nav", &early, "--strategy", "list-order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous: Late"))
        .stdout(predicate::str::contains("Next: (none)"));

    blogline()
        .current_dir(dir.path())
        .args(["nav", &early])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next: Late"));
}

#[test]
fn test_nav_show_title_from_config() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    std::fs::write(
        dir.path().join(".blogline/config.toml"),
        "[navigation]\nshow_title = true\n",
    )
    .unwrap();
    let a = create_channel(dir.path(), "Headline channel");
    let post = create_post(dir.path(), "Solo", &["--channel", &a]);

    blogline()
        .current_dir(dir.path())
        .args(["nav", &post])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Headline channel\n"));
}

#[test]
fn test_nav_for_post_without_channel() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let post = create_post(dir.path(), "Floating", &[]);

    blogline()
        .current_dir(dir.path())
        .args(["nav", &post])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not in a channel"));
}

#[test]
fn test_nav_unknown_strategy() {
    blogline()
        .args(["nav", "1", "--strategy", "random"])
        .assert()
        .code(2);
}
