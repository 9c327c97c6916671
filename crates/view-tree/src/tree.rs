//! Whole-tree container with an identity-indexed node table.

use indexmap::IndexMap;

use crate::snapshot::{Tag, ViewSnapshot};

/// An immutable view tree: a root tag plus a tag-indexed node table.
///
/// Fields are private; trees are only produced by
/// [`TreeBuilder`](crate::TreeBuilder), so a `ViewTree` in hand already
/// satisfies the structural invariants. Lookup is O(1) expected via the
/// `IndexMap`, and iteration order is the builder's insertion order, which
/// keeps diagnostics deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree {
    root: Tag,
    nodes: IndexMap<Tag, ViewSnapshot>,
}

impl ViewTree {
    pub(crate) fn from_parts(root: Tag, nodes: IndexMap<Tag, ViewSnapshot>) -> Self {
        ViewTree { root, nodes }
    }

    pub fn root(&self) -> Tag {
        self.root
    }

    /// The root node itself. Always present in a built tree.
    pub fn root_node(&self) -> &ViewSnapshot {
        &self.nodes[&self.root]
    }

    /// O(1) expected lookup by identity.
    pub fn get(&self, tag: Tag) -> Option<&ViewSnapshot> {
        self.nodes.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.nodes.contains_key(&tag)
    }

    /// Ordered child tags of `tag`; empty for leaves and unknown tags.
    pub fn children(&self, tag: Tag) -> &[Tag] {
        self.nodes
            .get(&tag)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of nodes in the tree (including the root).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &ViewSnapshot)> {
        self.nodes.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
