use crate::error::{BloglineError, Result};
use std::path::{Path, PathBuf};

/// Site directory name (hidden)
pub const SITE_DIR: &str = ".blogline";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` until a directory containing `.blogline/` is found
pub fn discover_site(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let site_path = current.join(SITE_DIR);
        if site_path.is_dir() {
            return Ok(site_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(BloglineError::SiteNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
