//! Structural-invariant validation for view trees.
//!
//! A well-formed tree has a single root, every child tag resolves to a node,
//! each node hangs under exactly one parent, and every node is reachable
//! from the root. Builder-produced trees satisfy all of this by
//! construction; `validate_tree` exists so consumers taking trees across an
//! API boundary can fail fast instead of producing a partial result.

use indexmap::IndexMap;
use thiserror::Error;

use crate::snapshot::Tag;
use crate::tree::ViewTree;

// ── Error ─────────────────────────────────────────────────────────────────

/// Structural violation found in a view tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("root {0} is not present in the node table")]
    MissingRoot(Tag),
    #[error("node {parent} references unknown child {child}")]
    UnknownChild { parent: Tag, child: Tag },
    #[error("tag {0} pushed twice")]
    DuplicateTag(Tag),
    #[error("node {child} appears under more than one parent ({first} and {second})")]
    MultipleParents { child: Tag, first: Tag, second: Tag },
    #[error("root {0} appears as a child")]
    RootAsChild(Tag),
    #[error("node {0} is not reachable from the root")]
    Unreachable(Tag),
}

// ── Public API ────────────────────────────────────────────────────────────

/// Check every structural invariant of `tree`, failing on the first
/// violation found. O(n) in the number of nodes.
pub fn validate_tree(tree: &ViewTree) -> Result<(), TreeError> {
    let root = tree.root();
    if !tree.contains(root) {
        return Err(TreeError::MissingRoot(root));
    }

    // Parent uniqueness + child resolution. A single pass records each
    // child's parent; a second assignment is a structure violation.
    let mut parent_of: IndexMap<Tag, Tag> = IndexMap::with_capacity(tree.len());
    for (&tag, node) in tree.iter() {
        for &child in &node.children {
            if child == root {
                return Err(TreeError::RootAsChild(root));
            }
            if !tree.contains(child) {
                return Err(TreeError::UnknownChild { parent: tag, child });
            }
            if let Some(&first) = parent_of.get(&child) {
                return Err(TreeError::MultipleParents {
                    child,
                    first,
                    second: tag,
                });
            }
            parent_of.insert(child, tag);
        }
    }

    // Reachability. With unique parents and the root never a child, any
    // unreachable node also covers the detached-cycle case.
    let mut seen: IndexMap<Tag, ()> = IndexMap::with_capacity(tree.len());
    let mut stack = vec![root];
    while let Some(tag) = stack.pop() {
        if seen.insert(tag, ()).is_some() {
            continue;
        }
        stack.extend(tree.children(tag).iter().copied());
    }
    for (&tag, _) in tree.iter() {
        if !seen.contains_key(&tag) {
            return Err(TreeError::Unreachable(tag));
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use crate::snapshot::ViewSnapshot;
    use serde_json::json;

    #[test]
    fn valid_tree_passes() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({})).with_children(vec![Tag(2)]))
            .unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({}))).unwrap();
        let t = b.build().unwrap();
        assert_eq!(validate_tree(&t), Ok(()));
    }

    #[test]
    fn unknown_child_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({})).with_children(vec![Tag(7)]))
            .unwrap();
        let err = b.build().unwrap_err();
        assert_eq!(
            err,
            TreeError::UnknownChild {
                parent: Tag(1),
                child: Tag(7)
            }
        );
    }

    #[test]
    fn duplicate_child_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(
            ViewSnapshot::new(1u64, "root", json!({})).with_children(vec![Tag(2), Tag(2)]),
        )
        .unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({}))).unwrap();
        let err = b.build().unwrap_err();
        assert!(matches!(err, TreeError::MultipleParents { child: Tag(2), .. }));
    }

    #[test]
    fn child_under_two_parents_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({})).with_children(vec![Tag(2), Tag(3)]))
            .unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({})).with_children(vec![Tag(4)]))
            .unwrap();
        b.push(ViewSnapshot::new(3u64, "view", json!({})).with_children(vec![Tag(4)]))
            .unwrap();
        b.push(ViewSnapshot::new(4u64, "text", json!({}))).unwrap();
        let err = b.build().unwrap_err();
        assert!(matches!(err, TreeError::MultipleParents { child: Tag(4), .. }));
    }

    #[test]
    fn root_as_child_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({})).with_children(vec![Tag(2)]))
            .unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({})).with_children(vec![Tag(1)]))
            .unwrap();
        let err = b.build().unwrap_err();
        assert_eq!(err, TreeError::RootAsChild(Tag(1)));
    }

    #[test]
    fn orphan_node_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({}))).unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({}))).unwrap();
        let err = b.build().unwrap_err();
        assert_eq!(err, TreeError::Unreachable(Tag(2)));
    }

    #[test]
    fn detached_cycle_rejected() {
        let mut b = TreeBuilder::new(Tag(1));
        b.push(ViewSnapshot::new(1u64, "root", json!({}))).unwrap();
        b.push(ViewSnapshot::new(2u64, "view", json!({})).with_children(vec![Tag(3)]))
            .unwrap();
        b.push(ViewSnapshot::new(3u64, "view", json!({})).with_children(vec![Tag(2)]))
            .unwrap();
        let err = b.build().unwrap_err();
        assert!(matches!(err, TreeError::Unreachable(_)));
    }

    #[test]
    fn missing_root_rejected() {
        let b = TreeBuilder::new(Tag(1));
        let err = b.build().unwrap_err();
        assert_eq!(err, TreeError::MissingRoot(Tag(1)));
    }
}
