//! Site configuration for blogline
//!
//! Configuration is stored in `.blogline/config.toml`. Every field has a
//! default, so a missing or partial file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{BloglineError, Result};

pub use types::{
    NavigationConfig, NavigationStrategy, ReconcileConfig, SiteConfig, SITE_FORMAT_VERSION,
};

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;

        if config.version > SITE_FORMAT_VERSION {
            return Err(BloglineError::InvalidSite {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    config.version, SITE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BloglineError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
