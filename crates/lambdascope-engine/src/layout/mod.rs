//! Tree layout for rendering a parsed expression as a visual diagram.
//!
//! The layout tree mirrors the AST shape — one node per item, plus one leaf
//! per declared lambda parameter — and gives every node a depth, the number
//! of terminal columns its subtree spans, and the column index of its
//! leftmost leaf. Renderers draw the rows of [`LayoutNode::depth_rows`]
//! deepest first and map each [`NodeKind`] to a label.

pub mod invariants;

use serde::Serialize;

use crate::ast::{Identifier, Item};

/// A positioned node of the visual tree.
///
/// Owns its children; the display payload is copied out of the AST so the
/// tree is self-contained and can outlive the parse result it was built
/// from. Built once per input change and discarded wholesale with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    pub kind: NodeKind,
    /// Distance from the root (root = 0).
    pub depth: usize,
    /// Number of terminal columns this node's subtree spans.
    pub width: usize,
    /// Column index of this node's leftmost leaf.
    pub offset: usize,
    pub children: Vec<LayoutNode>,
}

/// The display payload of a [`LayoutNode`], one variant per item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Procedure { name: String },
    Lambda,
    Identifier { name: String },
    StringLiteral { value: String },
    NumericLiteral { value: String },
    BooleanLiteral { value: bool },
}

impl LayoutNode {
    /// Builds the layout tree for `item` and assigns every node its column.
    pub fn build(item: &Item) -> LayoutNode {
        let mut root = LayoutNode::from_item(item, 0);
        root.assign_offsets(0);
        root
    }

    fn from_item(item: &Item, depth: usize) -> LayoutNode {
        match item {
            Item::Procedure { name, args } => {
                let children: Vec<LayoutNode> = args
                    .iter()
                    .map(|arg| LayoutNode::from_item(arg, depth + 1))
                    .collect();
                // A call with no arguments renders as a single column.
                let width = if children.is_empty() {
                    1
                } else {
                    children.iter().map(|c| c.width).sum()
                };
                LayoutNode {
                    kind: NodeKind::Procedure { name: name.clone() },
                    depth,
                    width,
                    offset: 0,
                    children,
                }
            }
            Item::Lambda { params, body } => {
                let body_node = LayoutNode::from_item(body, depth + 1);
                // Each declared parameter is a unit-width leaf slot; only
                // the body expands recursively.
                let width = params.len() + body_node.width;
                let children = params
                    .iter()
                    .map(|param| LayoutNode::param(param, depth + 1))
                    .chain(std::iter::once(body_node))
                    .collect();
                LayoutNode {
                    kind: NodeKind::Lambda,
                    depth,
                    width,
                    offset: 0,
                    children,
                }
            }
            Item::Identifier(ident) => LayoutNode::leaf(
                NodeKind::Identifier {
                    name: ident.name.clone(),
                },
                depth,
            ),
            Item::StringLiteral { value } => LayoutNode::leaf(
                NodeKind::StringLiteral {
                    value: value.clone(),
                },
                depth,
            ),
            Item::NumericLiteral { value } => LayoutNode::leaf(
                NodeKind::NumericLiteral {
                    value: value.clone(),
                },
                depth,
            ),
            Item::BooleanLiteral { value } => {
                LayoutNode::leaf(NodeKind::BooleanLiteral { value: *value }, depth)
            }
        }
    }

    fn param(param: &Identifier, depth: usize) -> LayoutNode {
        LayoutNode::leaf(
            NodeKind::Identifier {
                name: param.name.clone(),
            },
            depth,
        )
    }

    fn leaf(kind: NodeKind, depth: usize) -> LayoutNode {
        LayoutNode {
            kind,
            depth,
            width: 1,
            offset: 0,
            children: Vec::new(),
        }
    }

    /// Hands each child the running column cursor, advances it by the
    /// child's width, and keeps the offset this node was handed by its own
    /// parent. Leaves end up on the contiguous columns `0..N-1` in
    /// left-to-right order; every inner node starts at its leftmost leaf.
    fn assign_offsets(&mut self, offset: usize) {
        let mut column = offset;
        for child in &mut self.children {
            child.assign_offsets(column);
            column += child.width;
        }
        self.offset = offset;
    }

    /// Whether this node occupies a single terminal column of its own.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The nodes of each depth level, shallowest row first.
    ///
    /// Built from a single pre-order traversal: a node is appended to its
    /// depth's row, then each child subtree is visited completely before
    /// the next sibling. A whole left subtree is therefore finished before
    /// any later sibling subtree begins, so every row reads left to right
    /// in offset order.
    pub fn depth_rows(&self) -> Vec<Vec<&LayoutNode>> {
        let mut rows = Vec::new();
        self.collect_rows(&mut rows);
        rows
    }

    fn collect_rows<'a>(&'a self, rows: &mut Vec<Vec<&'a LayoutNode>>) {
        if rows.len() <= self.depth {
            rows.resize_with(self.depth + 1, Vec::new);
        }
        rows[self.depth].push(self);
        for child in &self.children {
            child.collect_rows(rows);
        }
    }
}
