//! Site management for blogline
//!
//! A site is the `.blogline/` directory holding `config.toml` and the SQLite
//! database. `Site` is the save lifecycle: every channel and post write goes
//! through it so the reconciler runs on each one.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Channel, Content, ContentId, Post, PostDraft, PublishStatus};
use crate::db::{Database, DATABASE_FILE};
use crate::display::{invalidation_tags, CacheTags};
use crate::error::{BloglineError, Result};
use crate::navigate::Navigator;
use crate::reconcile::{ChannelSweep, ChildrenDiff, Reconciler, SweepReport};
use crate::storage::{ContentQuery, ContentRepository, SortDirection, SortField};
pub use paths::{CONFIG_FILE, SITE_DIR};

/// Result of persisting a post through the save hook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSave {
    pub post: Post,
    /// Channels whose child list the hook rewrote
    pub written: Vec<ContentId>,
    /// The post, its old and new channels, and every post listed in them
    pub cache_tags: CacheTags,
}

/// Result of deleting a post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDeletion {
    pub post: Post,
    /// Reconciliation of the former parent, when it changed anything
    pub parent_sweep: Option<ChannelSweep>,
    /// The deleted post, its former channel, and that channel's remaining posts
    pub cache_tags: CacheTags,
}

/// A blog site on disk
#[derive(Debug)]
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
    db: Database,
}

impl Site {
    /// Discover a site by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let site_path = paths::discover_site(root)?;
        Self::open(&site_path)
    }

    /// Open an existing site directory
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(BloglineError::SiteNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            SiteConfig::default()
        };

        let db = Database::open(path)?;

        Ok(Site {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new site under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(SITE_DIR))
    }

    /// Initialize a site at an explicit site directory. Existing sites are
    /// left as they are.
    #[tracing::instrument(skip(site_root), fields(path = %site_root.display()))]
    pub fn init_at(site_root: &Path) -> Result<Self> {
        fs::create_dir_all(site_root)?;

        let config_path = site_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            let config = SiteConfig::default();
            config.save(&config_path)?;
            config
        };

        let db = Database::open(site_root)?;

        Ok(Site {
            root: site_root.to_path_buf(),
            config,
            db,
        })
    }

    /// Get the site root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn reconciler(&self) -> Reconciler<'_, Database> {
        Reconciler::new(&self.db)
    }

    pub fn navigator(&self) -> Navigator<'_, Database> {
        Navigator::new(&self.db)
    }

    /// Load a channel or fail with `ChannelNotFound`
    pub fn require_channel(&self, id: ContentId) -> Result<Channel> {
        self.db
            .load_channel(id)?
            .ok_or(BloglineError::ChannelNotFound { id })
    }

    /// Load a post or fail with `PostNotFound`
    pub fn require_post(&self, id: ContentId) -> Result<Post> {
        self.db
            .load_post(id)?
            .ok_or(BloglineError::PostNotFound { id })
    }

    /// All channels, oldest first
    pub fn list_channels(&self) -> Result<Vec<Channel>> {
        let ids = self
            .db
            .query_ids(&ContentQuery::channels().sort(SortField::Id, SortDirection::Asc))?;
        let mut channels = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(channel) = self.db.load_channel(id)? {
                channels.push(channel);
            }
        }
        Ok(channels)
    }

    /// The channel a new post gets when the editor picks none: the only
    /// channel when exactly one exists.
    pub fn default_channel_for_new_post(&self) -> Result<Option<Channel>> {
        let ids = self
            .db
            .query_ids(&ContentQuery::channels().sort(SortField::Id, SortDirection::Asc).limit(2))?;
        match ids.as_slice() {
            [only] => self.db.load_channel(*only),
            _ => Ok(None),
        }
    }

    /// Create a channel in the site's default language unless one is given
    #[tracing::instrument(skip(self))]
    pub fn create_channel(&self, title: &str, language: Option<&str>) -> Result<Channel> {
        let language = language.unwrap_or(&self.config.default_language);
        let channel = self
            .db
            .insert_channel(title, language, PublishStatus::Published)?;
        tracing::info!(channel_id = %channel.id, "channel_created");
        Ok(channel)
    }

    /// Persist an edited channel, re-deriving its child list first when
    /// `reconcile.on_channel_save` is enabled
    #[tracing::instrument(skip(self, channel), fields(channel_id = %channel.id))]
    pub fn save_channel(&self, channel: &mut Channel) -> Result<ChildrenDiff> {
        let diff = if self.config.reconcile.on_channel_save {
            self.reconciler().reconcile_channel_children(channel)?
        } else {
            ChildrenDiff::default()
        };
        self.db.save(&Content::Channel(channel.clone()))?;
        Ok(diff)
    }

    /// Store a new post and attach it to its channel
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create_post(&self, draft: PostDraft) -> Result<PostSave> {
        let post = self.db.insert_post(draft)?;
        let written = self.reconciler().reconcile_on_post_save(&post, None)?;
        let cache_tags = self.sibling_tags(post.id, &[post.parent_channel], &written)?;
        tracing::info!(post_id = %post.id, "post_created");
        Ok(PostSave {
            post,
            written,
            cache_tags,
        })
    }

    /// Persist an edited post, then move its back-reference if the parent
    /// changed
    #[tracing::instrument(skip(self, post), fields(post_id = %post.id))]
    pub fn save_post(&self, post: &Post) -> Result<PostSave> {
        let previous_parent = self.require_post(post.id)?.parent_channel;
        self.db.save(&Content::Post(post.clone()))?;
        let written = self
            .reconciler()
            .reconcile_on_post_save(post, previous_parent)?;
        let cache_tags =
            self.sibling_tags(post.id, &[previous_parent, post.parent_channel], &written)?;
        Ok(PostSave {
            post: post.clone(),
            written,
            cache_tags,
        })
    }

    /// Move a post to another channel, or detach it with `None`
    pub fn set_post_channel(&self, id: ContentId, channel: Option<ContentId>) -> Result<PostSave> {
        if let Some(channel_id) = channel {
            self.require_channel(channel_id)?;
        }
        let mut post = self.require_post(id)?;
        post.parent_channel = channel;
        self.save_post(&post)
    }

    pub fn set_post_status(&self, id: ContentId, status: PublishStatus) -> Result<PostSave> {
        let mut post = self.require_post(id)?;
        post.status = status;
        self.save_post(&post)
    }

    /// Delete a post and drop it from its former channel's child list
    #[tracing::instrument(skip(self))]
    pub fn delete_post(&self, id: ContentId) -> Result<PostDeletion> {
        let post = self.require_post(id)?;
        self.db.delete(id)?;

        let parent_sweep = match post.parent_channel {
            Some(channel_id) => self.reconciler().sweep_channel(channel_id)?,
            None => None,
        };
        let cache_tags = self.sibling_tags(id, &[post.parent_channel], &[])?;
        tracing::info!(post_id = %id, "post_deleted");
        Ok(PostDeletion {
            post,
            parent_sweep,
            cache_tags,
        })
    }

    /// Tags for the post plus each resolving channel and its listed posts
    fn sibling_tags(
        &self,
        post: ContentId,
        channels: &[Option<ContentId>],
        written: &[ContentId],
    ) -> Result<CacheTags> {
        let mut tags = CacheTags::new();
        tags.add(post);
        for id in channels.iter().flatten() {
            if let Some(channel) = self.db.load_channel(*id)? {
                tags.merge(invalidation_tags(&channel));
            }
        }
        tags.extend(written.iter().copied());
        Ok(tags)
    }

    /// Reconcile one channel, or every channel when `channel` is `None`
    pub fn sweep(&self, channel: Option<ContentId>) -> Result<SweepReport> {
        let start = Instant::now();
        let report = match channel {
            Some(id) => {
                self.require_channel(id)?;
                SweepReport {
                    channels_checked: 1,
                    changed: self.reconciler().sweep_channel(id)?.into_iter().collect(),
                }
            }
            None => self.reconciler().sweep()?,
        };
        crate::trace_time!(start, "site_sweep", changed = report.changed.len());
        Ok(report)
    }
}
