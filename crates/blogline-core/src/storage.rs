//! Storage capability consumed by the reconciler and navigator
//!
//! Both components receive a `ContentRepository` at construction time; they
//! never reach for a global storage handle.

use chrono::NaiveDate;

use crate::content::{Channel, Content, ContentId, ContentKind, Post, PublishStatus};
use crate::error::Result;

/// Field a query result can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PublishDate,
    Created,
    Id,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Inclusive bound on a post's publish date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    OnOrAfter(NaiveDate),
    OnOrBefore(NaiveDate),
}

/// Exact-match filtered, multi-key sorted id query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub kind: ContentKind,
    pub parent: Option<ContentId>,
    pub language: Option<String>,
    pub status: Option<PublishStatus>,
    pub publish_date: Option<DateBound>,
    pub sort: Vec<(SortField, SortDirection)>,
    pub limit: Option<usize>,
}

impl ContentQuery {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            parent: None,
            language: None,
            status: None,
            publish_date: None,
            sort: Vec::new(),
            limit: None,
        }
    }

    pub fn posts() -> Self {
        Self::new(ContentKind::Post)
    }

    pub fn channels() -> Self {
        Self::new(ContentKind::Channel)
    }

    pub fn parent(mut self, parent: ContentId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn status(mut self, status: PublishStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn publish_date(mut self, bound: DateBound) -> Self {
        self.publish_date = Some(bound);
        self
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort.push((field, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Entity read/write and query capability supplied by the host storage
pub trait ContentRepository {
    /// Ids matching the query, in the requested order
    fn query_ids(&self, query: &ContentQuery) -> Result<Vec<ContentId>>;

    /// Load an entity; `None` when the id does not resolve
    fn load(&self, id: ContentId) -> Result<Option<Content>>;

    /// Persist an entity. Failures surface as `BloglineError::StorageWrite`.
    fn save(&self, content: &Content) -> Result<()>;

    /// Load an id expected to be a channel; other kinds resolve to `None`
    fn load_channel(&self, id: ContentId) -> Result<Option<Channel>> {
        Ok(self.load(id)?.and_then(Content::into_channel))
    }

    /// Load an id expected to be a post; other kinds resolve to `None`
    fn load_post(&self, id: ContentId) -> Result<Option<Post>> {
        Ok(self.load(id)?.and_then(Content::into_post))
    }
}
