//! Previous/next navigation among sibling posts
//!
//! Siblings share a parent channel and a language and are published. They are
//! totally ordered by `(publish_date, created, id)` ascending, so posts
//! published on the same day still have a well-defined neighbour.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::content::{Channel, Content, ContentId, Post, PublishStatus};
use crate::error::Result;
use crate::storage::{ContentQuery, ContentRepository, DateBound, SortDirection, SortField};

/// Which neighbour to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Earlier,
    Later,
}

impl Direction {
    fn sort(self) -> SortDirection {
        match self {
            Direction::Earlier => SortDirection::Desc,
            Direction::Later => SortDirection::Asc,
        }
    }

    fn delta(self) -> isize {
        match self {
            Direction::Earlier => -1,
            Direction::Later => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Earlier => write!(f, "earlier"),
            Direction::Later => write!(f, "later"),
        }
    }
}

/// A neighbouring post, reduced to what a link needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiblingLink {
    pub id: ContentId,
    pub title: String,
    pub url: String,
}

impl From<&Post> for SiblingLink {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            url: post.url(),
        }
    }
}

/// Caller-supplied per-viewer visibility check
pub type VisibilityFilter<'a> = &'a dyn Fn(&Post) -> bool;

/// Computes sibling links for posts
pub struct Navigator<'a, R: ContentRepository + ?Sized> {
    repo: &'a R,
    visibility: Option<VisibilityFilter<'a>>,
}

impl<'a, R: ContentRepository + ?Sized> Navigator<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            visibility: None,
        }
    }

    /// Restrict candidates further, on top of the published filter
    pub fn with_visibility(mut self, filter: VisibilityFilter<'a>) -> Self {
        self.visibility = Some(filter);
        self
    }

    fn is_visible(&self, post: &Post) -> bool {
        post.is_published() && self.visibility.map_or(true, |visible| visible(post))
    }

    /// Adjacent sibling link for `content`, or `None` when there is no
    /// neighbour, `content` is not a post, or its channel does not resolve.
    pub fn find_adjacent(
        &self,
        content: &Content,
        direction: Direction,
    ) -> Result<Option<SiblingLink>> {
        let Some(post) = content.as_post() else {
            return Ok(None);
        };
        Ok(self
            .adjacent_post(post, direction)?
            .map(|p| SiblingLink::from(&p)))
    }

    /// Adjacent sibling post under the `(publish_date, created, id)` order
    pub fn adjacent_post(&self, post: &Post, direction: Direction) -> Result<Option<Post>> {
        let Some(channel_id) = post.parent_channel else {
            return Ok(None);
        };
        if self.repo.load_channel(channel_id)?.is_none() {
            return Ok(None);
        }

        let bound = match direction {
            Direction::Earlier => DateBound::OnOrBefore(post.publish_date),
            Direction::Later => DateBound::OnOrAfter(post.publish_date),
        };
        let order = direction.sort();
        let query = ContentQuery::posts()
            .parent(channel_id)
            .language(post.language.clone())
            .status(PublishStatus::Published)
            .publish_date(bound)
            .sort(SortField::PublishDate, order)
            .sort(SortField::Created, order)
            .sort(SortField::Id, order);

        let key = post.sibling_key();
        for id in self.repo.query_ids(&query)? {
            if id == post.id {
                continue;
            }
            let Some(candidate) = self.repo.load_post(id)? else {
                continue;
            };
            let beyond = match direction {
                Direction::Earlier => candidate.sibling_key() < key,
                Direction::Later => candidate.sibling_key() > key,
            };
            if beyond && self.is_visible(&candidate) {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Visible posts of a channel in `child_refs` order.
    ///
    /// Entries that no longer resolve, that point at a post now parented
    /// elsewhere, or that repeat an earlier entry are skipped.
    pub fn sibling_list(&self, channel: &Channel) -> Result<Vec<Post>> {
        let mut seen = HashSet::new();
        let mut posts = Vec::new();
        for child in &channel.child_refs {
            if !seen.insert(child.target) {
                continue;
            }
            let Some(post) = self.repo.load_post(child.target)? else {
                continue;
            };
            if post.parent_channel == Some(channel.id) && self.is_visible(&post) {
                posts.push(post);
            }
        }
        Ok(posts)
    }

    /// Neighbour in the channel's display order rather than by date
    pub fn find_adjacent_in_list(
        &self,
        content: &Content,
        direction: Direction,
    ) -> Result<Option<SiblingLink>> {
        let Some(post) = content.as_post() else {
            return Ok(None);
        };
        let Some(channel) = self.parent_channel(post)? else {
            return Ok(None);
        };
        let siblings = self.sibling_list(&channel)?;
        Ok(
            find_adjacent_in_precomputed_list(post.id, &siblings, direction.delta())
                .map(SiblingLink::from),
        )
    }

    /// The post's parent channel, when it resolves
    pub fn parent_channel(&self, post: &Post) -> Result<Option<Channel>> {
        match post.parent_channel {
            Some(id) => self.repo.load_channel(id),
            None => Ok(None),
        }
    }
}

/// Element `delta` positions away from `post` in an already ordered list.
///
/// `None` when `post` is not in the list or the offset falls outside it.
pub fn find_adjacent_in_precomputed_list(
    post: ContentId,
    siblings: &[Post],
    delta: isize,
) -> Option<&Post> {
    let position = siblings.iter().position(|p| p.id == post)?;
    let target = position.checked_add_signed(delta)?;
    siblings.get(target)
}
