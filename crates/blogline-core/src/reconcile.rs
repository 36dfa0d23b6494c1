//! Channel/post back-reference reconciliation
//!
//! A channel's `child_refs` is re-derived from the authoritative set of posts
//! pointing at it. Every run starts from a fresh query, so concurrent saves
//! that leave a channel stale converge the next time it is reconciled.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::content::{Channel, Content, ContentId, Post};
use crate::error::Result;
use crate::storage::{ContentQuery, ContentRepository, SortDirection, SortField};

/// Changes applied to a channel's child list by one reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChildrenDiff {
    /// Posts appended because they point at the channel but were not listed
    pub added: Vec<ContentId>,
    /// Listed targets dropped because they no longer point at the channel
    pub removed: Vec<ContentId>,
    /// Repeated entries collapsed for posts that are genuine children
    pub collapsed: usize,
}

impl ChildrenDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.collapsed == 0
    }
}

/// Outcome of reconciling one channel during a sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSweep {
    pub channel: ContentId,
    #[serde(flatten)]
    pub diff: ChildrenDiff,
}

/// Result of a maintenance sweep over every channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub channels_checked: usize,
    pub changed: Vec<ChannelSweep>,
}

impl SweepReport {
    /// Channels persisted by the sweep, for cache invalidation
    pub fn written(&self) -> Vec<ContentId> {
        self.changed.iter().map(|c| c.channel).collect()
    }
}

/// Keeps channel child lists consistent with post parent references
pub struct Reconciler<'a, R: ContentRepository + ?Sized> {
    repo: &'a R,
}

impl<'a, R: ContentRepository + ?Sized> Reconciler<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Bring `channel.child_refs` in line with the posts that name it as parent.
    ///
    /// Mutates the channel in place and never persists it; the caller saves.
    /// Running this twice with no change in between leaves the list untouched
    /// the second time.
    pub fn reconcile_channel_children(&self, channel: &mut Channel) -> Result<ChildrenDiff> {
        let query = ContentQuery::posts()
            .parent(channel.id)
            .sort(SortField::Id, SortDirection::Asc);
        let actual = self.repo.query_ids(&query)?;
        let actual_set: HashSet<ContentId> = actual.iter().copied().collect();
        let linked: HashSet<ContentId> = channel.child_refs.targets().into_iter().collect();

        let mut diff = ChildrenDiff::default();

        for id in actual.iter().filter(|id| !linked.contains(id)) {
            channel.child_refs.push(*id);
            diff.added.push(*id);
        }

        let mut extra: Vec<ContentId> = linked.difference(&actual_set).copied().collect();
        extra.sort();
        for id in extra {
            channel.child_refs.remove_all(id);
            diff.removed.push(id);
        }

        diff.collapsed = channel.child_refs.dedup_targets();

        if !diff.is_empty() {
            debug!(
                channel_id = %channel.id,
                added = diff.added.len(),
                removed = diff.removed.len(),
                collapsed = diff.collapsed,
                "channel_children_reconciled"
            );
        }

        Ok(diff)
    }

    /// Move a just-saved post's back-reference to its current parent.
    ///
    /// `previous_parent` is the parent the post held before this save, `None`
    /// for a new post. Returns the channels that were persisted. A storage
    /// failure aborts immediately; an already-saved old parent is not rolled back.
    pub fn reconcile_on_post_save(
        &self,
        post: &Post,
        previous_parent: Option<ContentId>,
    ) -> Result<Vec<ContentId>> {
        let mut written = Vec::new();

        if let Some(old_id) = previous_parent.filter(|old| Some(*old) != post.parent_channel) {
            if let Some(mut old_parent) = self.repo.load_channel(old_id)? {
                let removed = old_parent.child_refs.remove_all(post.id);
                debug!(
                    post_id = %post.id,
                    channel_id = %old_id,
                    removed,
                    "post_detached_from_channel"
                );
                self.repo.save(&Content::Channel(old_parent))?;
                written.push(old_id);
            }
        }

        if let Some(parent_id) = post.parent_channel {
            if let Some(mut parent) = self.repo.load_channel(parent_id)? {
                if !parent.child_refs.contains(post.id) {
                    parent.child_refs.push(post.id);
                    debug!(post_id = %post.id, channel_id = %parent_id, "post_attached_to_channel");
                    self.repo.save(&Content::Channel(parent))?;
                    written.push(parent_id);
                }
            }
        }

        Ok(written)
    }

    /// Reconcile every channel and persist the ones whose child list changed
    pub fn sweep(&self) -> Result<SweepReport> {
        let channel_ids = self
            .repo
            .query_ids(&ContentQuery::channels().sort(SortField::Id, SortDirection::Asc))?;

        let mut report = SweepReport::default();
        for id in channel_ids {
            if let Some(swept) = self.sweep_channel(id)? {
                report.changed.push(swept);
            }
            report.channels_checked += 1;
        }

        tracing::info!(
            channels = report.channels_checked,
            changed = report.changed.len(),
            "reconcile_sweep_complete"
        );
        Ok(report)
    }

    /// Reconcile a single stored channel, saving it if anything changed
    pub fn sweep_channel(&self, id: ContentId) -> Result<Option<ChannelSweep>> {
        let Some(mut channel) = self.repo.load_channel(id)? else {
            return Ok(None);
        };

        let diff = self.reconcile_channel_children(&mut channel)?;
        if diff.is_empty() {
            return Ok(None);
        }

        self.repo.save(&Content::Channel(channel))?;
        Ok(Some(ChannelSweep { channel: id, diff }))
    }
}
