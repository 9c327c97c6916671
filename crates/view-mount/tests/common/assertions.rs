//! Structural assertions comparing a live [`MemoryHost`] hierarchy against
//! an expected snapshot tree.

use std::collections::HashMap;

use view_mount::{MemoryHost, ViewHandle, ViewRegistry};
use view_tree::{Tag, ViewTree};

/// Assert the host hierarchy rooted at `root` is structurally and
/// content-equal to `tree`: same components, same props, same child order,
/// and every child handle maps back to the expected identity.
pub fn assert_host_matches_tree(
    host: &MemoryHost,
    registry: &ViewRegistry<ViewHandle>,
    root: ViewHandle,
    tree: &ViewTree,
) {
    let reverse: HashMap<ViewHandle, Tag> = registry.iter().map(|(tag, h)| (h, tag)).collect();
    assert_eq!(
        registry.get(tree.root()),
        Some(root),
        "root handle drifted from the registry"
    );
    check_node(host, &reverse, root, tree, tree.root());
}

fn check_node(
    host: &MemoryHost,
    reverse: &HashMap<ViewHandle, Tag>,
    handle: ViewHandle,
    tree: &ViewTree,
    tag: Tag,
) {
    let node = tree
        .get(tag)
        .unwrap_or_else(|| panic!("expected tree has no node {tag}"));
    let view = host
        .view(handle)
        .unwrap_or_else(|| panic!("no live view for {tag}"));
    assert_eq!(view.component, node.component, "component of {tag}");
    assert_eq!(view.props, node.props, "props of {tag}");
    let child_tags: Vec<Tag> = view
        .children
        .iter()
        .map(|h| {
            *reverse
                .get(h)
                .unwrap_or_else(|| panic!("unregistered child handle under {tag}"))
        })
        .collect();
    assert_eq!(child_tags, node.children, "child order under {tag}");
    for (&child_handle, &child_tag) in view.children.iter().zip(node.children.iter()) {
        check_node(host, reverse, child_handle, tree, child_tag);
    }
}
