//! Tree differ: compute the ordered mutation list between two snapshots.
//!
//! Matching is identity-first. Two children with different tags are never
//! unified into an Update even if structurally identical, and a tag that
//! persists across the commit is never split into Delete+Create — a move
//! decomposes into Remove+Insert instead, which the applier's apply-time
//! index semantics make correct as long as list order is respected.
//!
//! The emitted list is ordered in three phases over the whole commit:
//!
//! 1. **Removes** (per parent, in descending old index, so each index is
//!    still valid when applied), with Deletes for fully vacated subtrees
//!    emitted bottom-up right after the Remove that detached the subtree
//!    root. Descendants of a deleted subtree get Deletes only, no Removes;
//!    descendants that persist elsewhere in the new tree are detached, not
//!    deleted.
//! 2. **Updates**, deeper pairs before their parent's own update.
//! 3. **Creates/Inserts** (per parent, in ascending new index), each Create
//!    immediately before the Insert that attaches it, subtrees expanded
//!    top-down.
//!
//! Phase separation also keeps cross-parent moves sound: the Remove at the
//! old parent always applies before the Insert at the new one, regardless of
//! traversal order. Cost is linear in the combined size of the two trees.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use thiserror::Error;
use view_tree::{validate_tree, Tag, TreeError, ViewSnapshot, ViewTree};

use crate::mutation::{Mutation, MutationList};

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure while diffing two snapshots. No partial mutation list is ever
/// returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiffError {
    /// An input tree violates the structural invariants.
    #[error("malformed input tree: {0}")]
    Malformed(#[from] TreeError),
    /// The two roots carry different identities; the commit does not
    /// describe the same logical tree.
    #[error("root identity changed across commit ({old} -> {new})")]
    RootMismatch { old: Tag, new: Tag },
    /// The same identity reused with an incompatible component across the
    /// commit. This hides an upstream bug, so it is rejected rather than
    /// silently decomposed into Delete+Create.
    #[error("tag {tag} changed component across commit ({old_component:?} -> {new_component:?})")]
    TypeMismatch {
        tag: Tag,
        old_component: String,
        new_component: String,
    },
}

// ── Public API ────────────────────────────────────────────────────────────

/// Diff two snapshot trees using plain `Value` equality for property bags.
pub fn diff(old: &ViewTree, new: &ViewTree) -> Result<MutationList, DiffError> {
    diff_with(old, new, |a, b| a == b)
}

/// Diff two snapshot trees with an injected props comparator.
///
/// The comparator is the only view the differ has into property-bag
/// content; semantics of the bags belong to the props subsystem.
pub fn diff_with<F>(old: &ViewTree, new: &ViewTree, content_equals: F) -> Result<MutationList, DiffError>
where
    F: Fn(&Value, &Value) -> bool,
{
    validate_tree(old)?;
    validate_tree(new)?;

    let old_root = old.root_node();
    let new_root = new.root_node();
    if old_root.tag != new_root.tag {
        return Err(DiffError::RootMismatch {
            old: old_root.tag,
            new: new_root.tag,
        });
    }

    let mut phases = Phases::default();
    reconcile_pair(old, new, old_root, new_root, None, 0, &content_equals, &mut phases)?;

    let Phases {
        removes,
        updates,
        inserts,
    } = phases;
    let mut list = removes;
    list.extend(updates);
    list.extend(inserts);
    tracing::debug!(
        mutations = list.len(),
        old_nodes = old.len(),
        new_nodes = new.len(),
        "diff complete"
    );
    Ok(list)
}

// ── Phase buffers ─────────────────────────────────────────────────────────

/// The three global emission phases. Buffered separately during the walk
/// and concatenated removes → updates → inserts at the end.
#[derive(Default)]
struct Phases {
    removes: MutationList,
    updates: MutationList,
    inserts: MutationList,
}

// ── Core recursive differ ─────────────────────────────────────────────────

/// Reconcile two snapshots of the same logical node: check type
/// compatibility, diff the child lists, then emit the node's own Update if
/// its props changed. Children's instructions land before the parent's
/// update within the update phase.
#[allow(clippy::too_many_arguments)]
fn reconcile_pair<F>(
    old_tree: &ViewTree,
    new_tree: &ViewTree,
    old_node: &ViewSnapshot,
    new_node: &ViewSnapshot,
    parent: Option<Tag>,
    index: usize,
    content_equals: &F,
    phases: &mut Phases,
) -> Result<(), DiffError>
where
    F: Fn(&Value, &Value) -> bool,
{
    if old_node.component != new_node.component {
        return Err(DiffError::TypeMismatch {
            tag: new_node.tag,
            old_component: old_node.component.clone(),
            new_component: new_node.component.clone(),
        });
    }
    diff_children(old_tree, new_tree, old_node, new_node, content_equals, phases)?;
    if !content_equals(&old_node.props, &new_node.props) {
        phases.updates.push(Mutation::update(
            parent,
            old_node.clone(),
            new_node.clone(),
            index,
        ));
    }
    Ok(())
}

fn diff_children<F>(
    old_tree: &ViewTree,
    new_tree: &ViewTree,
    old_parent: &ViewSnapshot,
    new_parent: &ViewSnapshot,
    content_equals: &F,
    phases: &mut Phases,
) -> Result<(), DiffError>
where
    F: Fn(&Value, &Value) -> bool,
{
    let parent = new_parent.tag;
    let old_list = &old_parent.children;
    let new_list = &new_parent.children;

    let old_pos: HashMap<Tag, usize> =
        old_list.iter().enumerate().map(|(i, &t)| (t, i)).collect();
    let new_set: HashSet<Tag> = new_list.iter().copied().collect();

    // Same-parent move detection: walk the new list tracking the highest
    // old index seen so far among kept children. A kept child whose old
    // index falls below that watermark has moved and decomposes into
    // Remove+Insert; the others keep their relative order untouched.
    let mut moved: HashSet<Tag> = HashSet::new();
    let mut last_placed: Option<usize> = None;
    for &tag in new_list {
        if let Some(&old_index) = old_pos.get(&tag) {
            match last_placed {
                Some(watermark) if old_index < watermark => {
                    moved.insert(tag);
                }
                _ => last_placed = Some(old_index),
            }
        }
    }

    // Phase 1: removes, descending old index so every index is valid at
    // apply time. A departing child persisting elsewhere in the new tree is
    // only detached; a fully vacated subtree is dismantled bottom-up.
    for (old_index, &tag) in old_list.iter().enumerate().rev() {
        if new_set.contains(&tag) && !moved.contains(&tag) {
            continue;
        }
        let old_child = node(old_tree, parent, tag)?;
        phases
            .removes
            .push(Mutation::remove(parent, old_child.clone(), old_index));
        if !new_tree.contains(tag) {
            dismantle(old_tree, new_tree, old_child, &mut phases.removes)?;
        }
    }

    // Phase 2: recurse into every persisting pair under this parent, in new
    // list order. This also covers children that arrived here from a
    // different parent.
    for (new_index, &tag) in new_list.iter().enumerate() {
        if let Some(old_child) = old_tree.get(tag) {
            let new_child = node(new_tree, parent, tag)?;
            reconcile_pair(
                old_tree,
                new_tree,
                old_child,
                new_child,
                Some(parent),
                new_index,
                content_equals,
                phases,
            )?;
        }
    }

    // Phase 3: inserts, ascending new index. Kept-in-place children are
    // already in correct relative order after the removes, so each arriving
    // child lands directly at its final position.
    for (new_index, &tag) in new_list.iter().enumerate() {
        if old_pos.contains_key(&tag) {
            if moved.contains(&tag) {
                let new_child = node(new_tree, parent, tag)?;
                phases
                    .inserts
                    .push(Mutation::insert(parent, new_child.clone(), new_index));
            }
            continue;
        }
        let new_child = node(new_tree, parent, tag)?;
        if old_tree.contains(tag) {
            // Cross-parent move: the handle is live and already detached by
            // the old parent's remove phase.
            phases
                .inserts
                .push(Mutation::insert(parent, new_child.clone(), new_index));
        } else {
            create_subtree(old_tree, new_tree, parent, new_child, new_index, content_equals, phases)?;
        }
    }

    Ok(())
}

/// Emit Deletes for a fully vacated subtree, bottom-up: deepest nodes
/// first, the subtree root last. The caller has already emitted the Remove
/// that detached the root; nested children are released while still hanging
/// under their about-to-be-released parent, so they need no Remove of their
/// own. A descendant that persists elsewhere in the new tree is detached
/// instead and re-attached by its arrival site.
fn dismantle(
    old_tree: &ViewTree,
    new_tree: &ViewTree,
    old_node: &ViewSnapshot,
    out: &mut MutationList,
) -> Result<(), DiffError> {
    for (index, &child) in old_node.children.iter().enumerate().rev() {
        let child_node = node(old_tree, old_node.tag, child)?;
        if new_tree.contains(child) {
            out.push(Mutation::remove(old_node.tag, child_node.clone(), index));
        } else {
            dismantle(old_tree, new_tree, child_node, out)?;
        }
    }
    out.push(Mutation::delete(old_node.clone()));
    Ok(())
}

/// Emit Create/Insert for a freshly arriving subtree, top-down: the parent
/// is created and attached before any of its own children are inserted. A
/// descendant that persists from the old tree is moved in (Insert only) and
/// reconciled as a pair rather than re-created.
#[allow(clippy::too_many_arguments)]
fn create_subtree<F>(
    old_tree: &ViewTree,
    new_tree: &ViewTree,
    parent: Tag,
    new_node: &ViewSnapshot,
    index: usize,
    content_equals: &F,
    phases: &mut Phases,
) -> Result<(), DiffError>
where
    F: Fn(&Value, &Value) -> bool,
{
    if let Some(old_node) = old_tree.get(new_node.tag) {
        phases
            .inserts
            .push(Mutation::insert(parent, new_node.clone(), index));
        return reconcile_pair(
            old_tree,
            new_tree,
            old_node,
            new_node,
            Some(parent),
            index,
            content_equals,
            phases,
        );
    }
    phases.inserts.push(Mutation::create(new_node.clone()));
    phases
        .inserts
        .push(Mutation::insert(parent, new_node.clone(), index));
    for (child_index, &child) in new_node.children.iter().enumerate() {
        let child_node = node(new_tree, new_node.tag, child)?;
        create_subtree(
            old_tree,
            new_tree,
            new_node.tag,
            child_node,
            child_index,
            content_equals,
            phases,
        )?;
    }
    Ok(())
}

/// Node lookup that converts a miss into a malformed-input error. Validated
/// trees cannot actually miss here.
fn node<'t>(tree: &'t ViewTree, parent: Tag, tag: Tag) -> Result<&'t ViewSnapshot, DiffError> {
    tree.get(tag)
        .ok_or(DiffError::Malformed(TreeError::UnknownChild {
            parent,
            child: tag,
        }))
}

// ── Tests ─────────────────────────────────────────────────────────────────
