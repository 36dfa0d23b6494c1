//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the root path for site discovery.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve an explicit `--site` path against the root
pub fn resolve_site_path(root: &Path, site: &Path) -> PathBuf {
    if site.is_absolute() {
        site.to_path_buf()
    } else {
        root.join(site)
    }
}
