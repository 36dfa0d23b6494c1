//! Identity, kind and status tags for content entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BloglineError;

/// Identity of a channel or post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(i64);

impl ContentId {
    pub fn new(raw: i64) -> Self {
        ContentId(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Cache tag naming this entity
    pub fn cache_tag(self) -> String {
        format!("content:{}", self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentId {
    type Err = BloglineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Ok(raw) = s.trim().parse::<i64>() else {
            crate::bail_invalid!("content id", s)
        };
        if raw <= 0 {
            crate::bail_invalid!("content id", s);
        }
        Ok(ContentId(raw))
    }
}

/// Closed set of content kinds handled by blogline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Channel,
    Post,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Channel => "channel",
            ContentKind::Post => "post",
        }
    }

    /// Posts render their own title block, so the generic page header is hidden.
    pub fn shows_page_header(self) -> bool {
        matches!(self, ContentKind::Channel)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = BloglineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channel" => Ok(ContentKind::Channel),
            "post" => Ok(ContentKind::Post),
            other => crate::bail_invalid!("content kind", other),
        }
    }
}

/// Publication state of a content entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Published,
    Unpublished,
}

impl PublishStatus {
    pub fn is_published(self) -> bool {
        self == PublishStatus::Published
    }

    pub fn as_flag(self) -> i64 {
        match self {
            PublishStatus::Published => 1,
            PublishStatus::Unpublished => 0,
        }
    }

    pub fn from_flag(flag: i64) -> Self {
        if flag != 0 {
            PublishStatus::Published
        } else {
            PublishStatus::Unpublished
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStatus::Published => write!(f, "published"),
            PublishStatus::Unpublished => write!(f, "unpublished"),
        }
    }
}
