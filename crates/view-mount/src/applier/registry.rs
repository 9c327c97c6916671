//! Identity → live-handle registry.

use indexmap::IndexMap;
use view_tree::Tag;

/// Maps logical node identity to the live host handle.
///
/// This is the only state that survives across commits. It is owned by the
/// [`Applier`](crate::Applier) and mutated only when views are created
/// (insert) or deleted (remove); the differ never reads it.
#[derive(Debug, Clone)]
pub struct ViewRegistry<H> {
    entries: IndexMap<Tag, H>,
}

impl<H: Copy> ViewRegistry<H> {
    pub fn new() -> Self {
        ViewRegistry {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, tag: Tag) -> Option<H> {
        self.entries.get(&tag).copied()
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub(crate) fn insert(&mut self, tag: Tag, handle: H) {
        self.entries.insert(tag, handle);
    }

    pub(crate) fn remove(&mut self, tag: Tag) -> Option<H> {
        self.entries.shift_remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, H)> + '_ {
        self.entries.iter().map(|(&tag, &handle)| (tag, handle))
    }
}

impl<H: Copy> Default for ViewRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
