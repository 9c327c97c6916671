//! The five-variant [`Mutation`] instruction and its constructor helpers.

use view_tree::{Tag, ViewSnapshot};

/// An ordered list of mutations, produced fresh per commit and consumed
/// exactly once by the applier.
pub type MutationList = Vec<Mutation>;

/// One atomic edit instruction against the host view hierarchy.
///
/// `index` operands are always expressed relative to the parent's child list
/// *as it exists at the moment the instruction is applied*, never relative
/// to the original or final tree in isolation. That makes list order
/// load-bearing: the differ guarantees that every Create precedes the Insert
/// that attaches it, every Delete follows the Remove that detached it, and
/// per-parent Removes precede Inserts that reuse the vacated positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Allocate a host view for `new_node`; not yet attached anywhere.
    Create { new_node: ViewSnapshot },
    /// Release the host view for `old_node`; the view must already be
    /// detached (or hang under a view that is itself being released).
    Delete { old_node: ViewSnapshot },
    /// Attach `new_node`'s host view as a child of `parent` at `index`.
    Insert {
        parent: Tag,
        new_node: ViewSnapshot,
        index: usize,
    },
    /// Detach the child currently at `index` of `parent`; that child is
    /// `old_node`.
    Remove {
        parent: Tag,
        old_node: ViewSnapshot,
        index: usize,
    },
    /// Replace `old_node`'s content in place with `new_node`'s content.
    /// No identity change, no structural move. `parent` is `None` when the
    /// updated node is the tree root.
    Update {
        parent: Option<Tag>,
        old_node: ViewSnapshot,
        new_node: ViewSnapshot,
        index: usize,
    },
}

impl Mutation {
    pub fn create(new_node: ViewSnapshot) -> Self {
        Mutation::Create { new_node }
    }

    pub fn delete(old_node: ViewSnapshot) -> Self {
        Mutation::Delete { old_node }
    }

    pub fn insert(parent: Tag, new_node: ViewSnapshot, index: usize) -> Self {
        Mutation::Insert {
            parent,
            new_node,
            index,
        }
    }

    pub fn remove(parent: Tag, old_node: ViewSnapshot, index: usize) -> Self {
        Mutation::Remove {
            parent,
            old_node,
            index,
        }
    }

    pub fn update(
        parent: Option<Tag>,
        old_node: ViewSnapshot,
        new_node: ViewSnapshot,
        index: usize,
    ) -> Self {
        Mutation::Update {
            parent,
            old_node,
            new_node,
            index,
        }
    }

    /// Operation name for diagnostics.
    pub fn op_name(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "create",
            Mutation::Delete { .. } => "delete",
            Mutation::Insert { .. } => "insert",
            Mutation::Remove { .. } => "remove",
            Mutation::Update { .. } => "update",
        }
    }

    /// The identity this instruction primarily concerns: the node being
    /// created, deleted, attached, detached, or updated.
    pub fn subject(&self) -> Tag {
        match self {
            Mutation::Create { new_node } => new_node.tag,
            Mutation::Delete { old_node } => old_node.tag,
            Mutation::Insert { new_node, .. } => new_node.tag,
            Mutation::Remove { old_node, .. } => old_node.tag,
            Mutation::Update { old_node, .. } => old_node.tag,
        }
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Create { new_node } => write!(f, "create {}", new_node.tag),
            Mutation::Delete { old_node } => write!(f, "delete {}", old_node.tag),
            Mutation::Insert {
                parent,
                new_node,
                index,
            } => write!(f, "insert {} into {parent} at {index}", new_node.tag),
            Mutation::Remove {
                parent,
                old_node,
                index,
            } => write!(f, "remove {} from {parent} at {index}", old_node.tag),
            Mutation::Update {
                old_node, index, ..
            } => write!(f, "update {} at {index}", old_node.tag),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
