use crate::cli::support::{blogline, create_channel, create_post, init_site, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_channel_create_and_list() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    blogline()
        .current_dir(dir.path())
        .args(["channel", "create", "Parish news"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created channel"));
    blogline()
        .current_dir(dir.path())
        .args(["channel", "create", "Newyddion", "--language", "cy"])
        .assert()
        .success();

    blogline()
        .current_dir(dir.path())
        .args(["channel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parish news [en] (0 posts)"))
        .stdout(predicate::str::contains("Newyddion [cy]"));
}

#[test]
fn test_channel_show_json_lists_children() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    let channel = create_channel(dir.path(), "Events");
    let post = create_post(dir.path(), "Fete", &["--channel", &channel]);

    let output = blogline()
        .current_dir(dir.path())
        .args(["--format", "json", "channel", "show", &channel])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["channel"]["title"], "Events");
    assert_eq!(json["channel"]["child_refs"][0]["target"].to_string(), post);
    assert_eq!(json["shows_page_header"], true);
    assert_eq!(json["blocks_visible"], true);
}

#[test]
fn test_channel_show_unknown() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    blogline()
        .current_dir(dir.path())
        .args(["channel", "show", "12"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("channel not found: 12"));
}
