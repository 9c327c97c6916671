//! Validating constructor for [`ViewTree`].

use indexmap::IndexMap;

use crate::snapshot::{Tag, ViewSnapshot};
use crate::tree::ViewTree;
use crate::validate::{validate_tree, TreeError};

/// Accumulates nodes for a tree rooted at a declared tag, then validates the
/// whole structure on [`build`](TreeBuilder::build).
///
/// `push` order is preserved in the final node table; duplicate tags are
/// rejected eagerly, all other invariants at build time.
#[derive(Debug)]
pub struct TreeBuilder {
    root: Tag,
    nodes: IndexMap<Tag, ViewSnapshot>,
}

impl TreeBuilder {
    pub fn new(root: Tag) -> Self {
        TreeBuilder {
            root,
            nodes: IndexMap::new(),
        }
    }

    /// Add one node. Fails if the tag was already pushed.
    pub fn push(&mut self, node: ViewSnapshot) -> Result<&mut Self, TreeError> {
        if self.nodes.contains_key(&node.tag) {
            return Err(TreeError::DuplicateTag(node.tag));
        }
        self.nodes.insert(node.tag, node);
        Ok(self)
    }

    /// Validate and produce the immutable tree.
    pub fn build(self) -> Result<ViewTree, TreeError> {
        let tree = ViewTree::from_parts(self.root, self.nodes);
        validate_tree(&tree)?;
        Ok(tree)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
