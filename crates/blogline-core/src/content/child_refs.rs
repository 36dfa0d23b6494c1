//! Ordered child reference list held by a channel
//!
//! Membership checks and removals are keyed on the target identity only.
//! Per-entry metadata (such as `pinned`) never takes part in comparisons.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ContentId;

/// A single entry in a channel's child list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    pub target: ContentId,
    /// Editor-set promotion flag
    #[serde(default)]
    pub pinned: bool,
}

impl ChildRef {
    pub fn new(target: ContentId) -> Self {
        Self {
            target,
            pinned: false,
        }
    }
}

/// Insertion-ordered list of child references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildRefs(Vec<ChildRef>);

impl ChildRefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildRef> {
        self.0.iter()
    }

    /// Target ids in list order, duplicates included
    pub fn targets(&self) -> Vec<ContentId> {
        self.0.iter().map(|r| r.target).collect()
    }

    pub fn contains(&self, id: ContentId) -> bool {
        self.0.iter().any(|r| r.target == id)
    }

    /// Append a fresh entry for `id`
    pub fn push(&mut self, id: ContentId) {
        self.0.push(ChildRef::new(id));
    }

    pub fn push_ref(&mut self, child: ChildRef) {
        self.0.push(child);
    }

    /// Remove every entry targeting `id`, returning how many were dropped
    pub fn remove_all(&mut self, id: ContentId) -> usize {
        let before = self.0.len();
        self.0.retain(|r| r.target != id);
        before - self.0.len()
    }

    /// Drop repeated entries for the same target, keeping the first occurrence
    pub fn dedup_targets(&mut self) -> usize {
        let before = self.0.len();
        let mut seen = HashSet::new();
        self.0.retain(|r| seen.insert(r.target));
        before - self.0.len()
    }
}

impl FromIterator<ContentId> for ChildRefs {
    fn from_iter<I: IntoIterator<Item = ContentId>>(iter: I) -> Self {
        ChildRefs(iter.into_iter().map(ChildRef::new).collect())
    }
}

impl FromIterator<ChildRef> for ChildRefs {
    fn from_iter<I: IntoIterator<Item = ChildRef>>(iter: I) -> Self {
        ChildRefs(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChildRefs {
    type Item = &'a ChildRef;
    type IntoIter = std::slice::Iter<'a, ChildRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
