use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;

/// Get a Command for blogline
pub fn blogline() -> Command {
    cargo_bin_cmd!("blogline")
}

/// Extract the content ID printed by a `--quiet` create (first line)
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn init_site(dir: &Path) {
    blogline().current_dir(dir).arg("init").assert().success();
}

pub fn create_channel(dir: &Path, title: &str) -> String {
    let output = blogline()
        .current_dir(dir)
        .args(["--quiet", "channel", "create", title])
        .output()
        .unwrap();
    assert!(output.status.success());
    extract_id(&output)
}

/// Create a post; `extra` is appended to `post create <title>`
pub fn create_post(dir: &Path, title: &str, extra: &[&str]) -> String {
    let output = blogline()
        .current_dir(dir)
        .args(["--quiet", "post", "create", title])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "post create failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    extract_id(&output)
}
