//! Assertions over a laid-out tree, shared by integration and property
//! tests.

use super::LayoutNode;

/// Checks every depth/width/offset invariant of a tree rooted at depth 0.
/// Panics with a description of the first violation.
pub fn check(root: &LayoutNode) {
    assert_eq!(root.depth, 0, "root must sit at depth 0");
    assert_eq!(root.offset, 0, "root must start at column 0");
    check_node(root);

    let mut leaves = Vec::new();
    collect_leaves(root, &mut leaves);
    for (column, leaf) in leaves.iter().enumerate() {
        assert_eq!(
            leaf.offset, column,
            "leaf columns must be the contiguous sequence 0..N-1 in traversal order"
        );
    }
}

fn check_node(node: &LayoutNode) {
    assert!(node.width >= 1, "width must be at least 1: {:?}", node.kind);
    if node.children.is_empty() {
        assert_eq!(node.width, 1, "a leaf spans exactly one column");
        return;
    }

    let span: usize = node.children.iter().map(|c| c.width).sum();
    assert_eq!(node.width, span, "an inner node spans its children's columns");
    assert_eq!(
        node.offset, node.children[0].offset,
        "an inner node starts at its leftmost child's column"
    );

    let mut column = node.offset;
    for child in &node.children {
        assert_eq!(child.depth, node.depth + 1, "child depth grows by one");
        assert_eq!(child.offset, column, "children pack left to right");
        column += child.width;
        check_node(child);
    }
}

fn collect_leaves<'a>(node: &'a LayoutNode, leaves: &mut Vec<&'a LayoutNode>) {
    if node.children.is_empty() {
        leaves.push(node);
        return;
    }
    for child in &node.children {
        collect_leaves(child, leaves);
    }
}
