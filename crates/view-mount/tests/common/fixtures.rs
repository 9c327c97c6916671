//! Shared tree fixtures for the view-mount integration tests.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use view_tree::{Tag, TreeBuilder, ViewSnapshot, ViewTree};

/// Root tag used by every fixture tree.
pub const ROOT: u64 = 1;

/// Number of pooled (non-root) tags available to [`plan_tree`].
pub const PLAN_POOL: usize = 10;

const COLORS: [&str; 4] = ["red", "green", "blue", "plum"];

/// Build a tree from `(tag, component, props, children)` rows; the first row
/// is the root.
pub fn tree(rows: &[(u64, &str, Value, &[u64])]) -> ViewTree {
    let mut b = TreeBuilder::new(Tag(rows[0].0));
    for (tag, component, props, children) in rows {
        b.push(
            ViewSnapshot::new(*tag, *component, props.clone())
                .with_children(children.iter().map(|&c| Tag(c)).collect()),
        )
        .expect("fixture row pushed twice");
    }
    b.build().expect("fixture tree malformed")
}

/// Deterministically build a well-formed tree from a randomized plan.
///
/// Pool slot `i` (tag `i + 2`) is included iff `present[i]`; its parent is
/// picked among the root and already-placed smaller tags (so the result is
/// always acyclic with a single root), sibling order comes from the `order`
/// bytes, and props from the `color` bytes. A tag's component is a pure
/// function of the tag, so the same identity never changes type between two
/// plans — overlapping identities across plans exercise updates, moves, and
/// reparenting rather than type faults.
pub fn plan_tree(present: &[bool], parent_choice: &[u8], order: &[u8], color: &[u8]) -> ViewTree {
    let mut children: BTreeMap<u64, Vec<(u8, u64)>> = BTreeMap::new();
    children.insert(ROOT, Vec::new());
    let mut placed: Vec<u64> = Vec::new();
    for i in 0..PLAN_POOL {
        if !present[i] {
            continue;
        }
        let tag = i as u64 + 2;
        let mut candidates = vec![ROOT];
        candidates.extend(placed.iter().copied());
        let parent = candidates[parent_choice[i] as usize % candidates.len()];
        children.entry(parent).or_default().push((order[i], tag));
        children.entry(tag).or_default();
        placed.push(tag);
    }

    let mut b = TreeBuilder::new(Tag(ROOT));
    for (tag, mut kids) in children {
        kids.sort_unstable();
        let kid_tags = kids.into_iter().map(|(_, t)| Tag(t)).collect();
        let props = if tag == ROOT {
            json!({})
        } else {
            json!({"color": COLORS[color[(tag - 2) as usize] as usize % COLORS.len()]})
        };
        b.push(ViewSnapshot::new(tag, component_for(tag), props).with_children(kid_tags))
            .expect("plan produced a duplicate tag");
    }
    b.build().expect("plan produced a malformed tree")
}

/// Component discriminator as a pure function of the tag.
pub fn component_for(tag: u64) -> &'static str {
    if tag == ROOT {
        "root"
    } else if tag % 3 == 0 {
        "text"
    } else {
        "view"
    }
}
