//! Render-ready data for the navigation and contents blocks
//!
//! Builders here produce plain data plus the cache tags of every entity they
//! read. Invalidating those tags is the host's job.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::{NavigationConfig, NavigationStrategy};
use crate::content::{Channel, Content, ContentId};
use crate::error::Result;
use crate::navigate::{Direction, Navigator};
use crate::storage::ContentRepository;

/// Ordered, de-duplicated set of `content:{id}` cache tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CacheTags(BTreeSet<String>);

impl CacheTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ContentId) {
        self.0.insert(id.cache_tag());
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = ContentId>) {
        for id in ids {
            self.add(id);
        }
    }

    pub fn merge(&mut self, other: CacheTags) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, id: ContentId) -> bool {
        self.0.contains(&id.cache_tag())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<ContentId> for CacheTags {
    fn from_iter<I: IntoIterator<Item = ContentId>>(iter: I) -> Self {
        let mut tags = CacheTags::new();
        tags.extend(iter);
        tags
    }
}

/// Previous/next links for one post. Absent links are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationBlock {
    pub previous_title: String,
    pub previous_url: String,
    pub next_title: String,
    pub next_url: String,
    pub show_title: bool,
    pub channel_title: String,
    pub cache_tags: CacheTags,
}

impl NavigationBlock {
    pub fn build<R: ContentRepository + ?Sized>(
        navigator: &Navigator<'_, R>,
        content: &Content,
        config: &NavigationConfig,
    ) -> Result<Self> {
        let mut block = NavigationBlock {
            show_title: config.show_title,
            ..Default::default()
        };
        block.cache_tags.add(content.id());

        let Some(post) = content.as_post() else {
            return Ok(block);
        };
        let Some(channel) = navigator.parent_channel(post)? else {
            return Ok(block);
        };
        block.channel_title = channel.title.clone();
        block.cache_tags.add(channel.id);

        let (previous, next) = match config.strategy {
            NavigationStrategy::ByDate => (
                navigator.find_adjacent(content, Direction::Earlier)?,
                navigator.find_adjacent(content, Direction::Later)?,
            ),
            NavigationStrategy::ListOrder => {
                let siblings = navigator.sibling_list(&channel)?;
                block.cache_tags.extend(siblings.iter().map(|p| p.id));
                (
                    navigator.find_adjacent_in_list(content, Direction::Earlier)?,
                    navigator.find_adjacent_in_list(content, Direction::Later)?,
                )
            }
        };

        if let Some(link) = previous {
            block.cache_tags.add(link.id);
            block.previous_title = link.title;
            block.previous_url = link.url;
        }
        if let Some(link) = next {
            block.cache_tags.add(link.id);
            block.next_title = link.title;
            block.next_url = link.url;
        }

        Ok(block)
    }

    pub fn has_previous(&self) -> bool {
        !self.previous_url.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.next_url.is_empty()
    }
}

/// One entry in a channel contents listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildListItem {
    pub id: ContentId,
    pub title: String,
    pub url: String,
    /// The entry is the page being viewed
    pub current: bool,
}

/// Visible posts of a channel in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChildListBlock {
    pub channel: Option<ContentId>,
    pub channel_title: String,
    pub items: Vec<ChildListItem>,
    pub cache_tags: CacheTags,
}

impl ChildListBlock {
    /// Listing for a channel, or for the channel a post belongs to
    pub fn build<R: ContentRepository + ?Sized>(
        navigator: &Navigator<'_, R>,
        content: &Content,
    ) -> Result<Self> {
        let channel = match content {
            Content::Channel(channel) => Some(channel.clone()),
            Content::Post(post) => navigator.parent_channel(post)?,
        };
        let Some(channel) = channel else {
            return Ok(ChildListBlock::default());
        };

        let posts = navigator.sibling_list(&channel)?;
        let mut cache_tags = CacheTags::new();
        cache_tags.add(channel.id);
        cache_tags.extend(posts.iter().map(|p| p.id));

        let items = posts
            .iter()
            .map(|p| ChildListItem {
                id: p.id,
                title: p.title.clone(),
                url: p.url(),
                current: p.id == content.id(),
            })
            .collect();

        Ok(ChildListBlock {
            channel: Some(channel.id),
            channel_title: channel.title,
            items,
            cache_tags,
        })
    }
}

/// Whether channel blocks apply to `content` at all: a channel with at least
/// one child reference, or a post whose channel resolves.
pub fn block_access<R: ContentRepository + ?Sized>(repo: &R, content: &Content) -> Result<bool> {
    match content {
        Content::Channel(channel) => Ok(!channel.child_refs.is_empty()),
        Content::Post(post) => match post.parent_channel {
            Some(id) => Ok(repo.load_channel(id)?.is_some()),
            None => Ok(false),
        },
    }
}

/// Cache tags to invalidate after a channel's children changed
pub fn invalidation_tags(channel: &Channel) -> CacheTags {
    let mut tags = CacheTags::new();
    tags.add(channel.id);
    tags.extend(channel.child_refs.targets());
    tags
}
