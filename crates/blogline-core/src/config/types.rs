//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BloglineError;

/// Current site format version
pub const SITE_FORMAT_VERSION: u32 = 1;

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language code given to new content
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Previous/next block settings
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Back-reference maintenance settings
    #[serde(default)]
    pub reconcile: ReconcileConfig,
}

/// How the previous/next block picks neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationStrategy {
    /// Date order with creation time and id tie-breaks
    #[default]
    ByDate,
    /// The channel's own child list order
    ListOrder,
}

impl NavigationStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            NavigationStrategy::ByDate => "by-date",
            NavigationStrategy::ListOrder => "list-order",
        }
    }
}

impl fmt::Display for NavigationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationStrategy {
    type Err = BloglineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by-date" => Ok(NavigationStrategy::ByDate),
            "list-order" => Ok(NavigationStrategy::ListOrder),
            other => Err(BloglineError::invalid_value("navigation strategy", other)),
        }
    }
}

/// Previous/next block configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub strategy: NavigationStrategy,

    /// Render the channel title above the links
    #[serde(default)]
    pub show_title: bool,
}

/// Reconciliation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Re-derive a channel's child list every time the channel is saved
    #[serde(default = "default_on_channel_save")]
    pub on_channel_save: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: SITE_FORMAT_VERSION,
            default_language: default_language(),
            navigation: NavigationConfig::default(),
            reconcile: ReconcileConfig::default(),
        }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            on_channel_save: default_on_channel_save(),
        }
    }
}

fn default_version() -> u32 {
    SITE_FORMAT_VERSION
}

fn default_language() -> String {
    "en".to_string()
}

fn default_on_channel_save() -> bool {
    true
}
