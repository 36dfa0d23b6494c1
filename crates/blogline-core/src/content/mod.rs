//! Channel and post content model
//!
//! A channel owns its ordered `child_refs`; a post owns its `parent_channel`
//! scalar. Neither side holds the other, and only the reconciler keeps the
//! two in agreement.

mod child_refs;
mod types;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub use child_refs::{ChildRef, ChildRefs};
pub use types::{ContentId, ContentKind, PublishStatus};

/// Parent content aggregating an ordered collection of posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ContentId,
    pub title: String,
    pub language: String,
    pub status: PublishStatus,
    pub child_refs: ChildRefs,
}

/// Child content belonging to at most one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: ContentId,
    pub title: String,
    pub parent_channel: Option<ContentId>,
    pub publish_date: NaiveDate,
    pub language: String,
    pub created: DateTime<Utc>,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_alias: Option<String>,
}

/// Total ordering key for siblings: date first, then creation time, then id
pub type SiblingKey = (NaiveDate, DateTime<Utc>, ContentId);

impl Post {
    pub fn sibling_key(&self) -> SiblingKey {
        (self.publish_date, self.created, self.id)
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    /// Public URL: the alias when one is set, otherwise the canonical path
    pub fn url(&self) -> String {
        match &self.url_alias {
            Some(alias) => alias.clone(),
            None => format!("/post/{}", self.id),
        }
    }
}

/// Field values for a post that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub parent_channel: Option<ContentId>,
    pub publish_date: NaiveDate,
    pub language: String,
    pub created: DateTime<Utc>,
    pub status: PublishStatus,
    pub url_alias: Option<String>,
}

impl PostDraft {
    /// Draft dated today, published, with a title-derived alias
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        let title = title.into();
        // Storage keeps microseconds
        let created = Utc::now().trunc_subsecs(6);
        Self {
            url_alias: alias_for_title(&title),
            title,
            parent_channel: None,
            publish_date: created.date_naive(),
            language: language.into(),
            created,
            status: PublishStatus::Published,
        }
    }

    pub fn into_post(self, id: ContentId) -> Post {
        Post {
            id,
            title: self.title,
            parent_channel: self.parent_channel,
            publish_date: self.publish_date,
            language: self.language,
            created: self.created,
            status: self.status,
            url_alias: self.url_alias,
        }
    }
}

/// Build the default URL alias for a new post title
pub fn alias_for_title(title: &str) -> Option<String> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        None
    } else {
        Some(format!("/blog/{}", slug))
    }
}

/// A stored entity, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Channel(Channel),
    Post(Post),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Channel(_) => ContentKind::Channel,
            Content::Post(_) => ContentKind::Post,
        }
    }

    pub fn id(&self) -> ContentId {
        match self {
            Content::Channel(c) => c.id,
            Content::Post(p) => p.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Content::Channel(c) => &c.title,
            Content::Post(p) => &p.title,
        }
    }

    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Content::Post(p) => Some(p),
            Content::Channel(_) => None,
        }
    }

    pub fn as_channel(&self) -> Option<&Channel> {
        match self {
            Content::Channel(c) => Some(c),
            Content::Post(_) => None,
        }
    }

    pub fn into_post(self) -> Option<Post> {
        match self {
            Content::Post(p) => Some(p),
            Content::Channel(_) => None,
        }
    }

    pub fn into_channel(self) -> Option<Channel> {
        match self {
            Content::Channel(c) => Some(c),
            Content::Post(_) => None,
        }
    }
}

impl From<Channel> for Content {
    fn from(channel: Channel) -> Self {
        Content::Channel(channel)
    }
}

impl From<Post> for Content {
    fn from(post: Post) -> Self {
        Content::Post(post)
    }
}
