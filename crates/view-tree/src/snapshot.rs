//! Per-node snapshot value type and the [`Tag`] identity key.

use serde_json::Value;

// ── Tag ───────────────────────────────────────────────────────────────────

/// Stable, globally unique identity of a view node.
///
/// A tag persists across commits while the node is logically "the same"
/// element; a fresh element gets a fresh tag. The differ keys all matching
/// on tags, never on content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub u64);

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for Tag {
    fn from(raw: u64) -> Self {
        Tag(raw)
    }
}

// ── ViewSnapshot ──────────────────────────────────────────────────────────

/// Immutable snapshot of a single view node.
///
/// The property bag is an opaque, equality-comparable blob; its content
/// semantics belong to the props subsystem, and the differ only ever passes
/// it to an injected comparator. Children are recorded as an ordered list of
/// tags, resolved through the owning [`ViewTree`](crate::ViewTree)'s node
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub tag: Tag,
    /// Component/type discriminator. Two snapshots with the same tag must
    /// carry the same component across commits.
    pub component: String,
    pub props: Value,
    pub children: Vec<Tag>,
}

impl ViewSnapshot {
    pub fn new(tag: impl Into<Tag>, component: impl Into<String>, props: Value) -> Self {
        ViewSnapshot {
            tag: tag.into(),
            component: component.into(),
            props,
            children: Vec::new(),
        }
    }

    /// Builder-style helper attaching an ordered child tag list.
    pub fn with_children(mut self, children: Vec<Tag>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
