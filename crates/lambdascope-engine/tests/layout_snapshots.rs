//! End-to-end fixtures: parse an expression, lay it out, and render the
//! depth rows as a character grid — one line per depth, one cell per
//! terminal column, `·` for cells no node starts in.

use lambdascope_engine::layout::invariants;
use lambdascope_engine::{LayoutNode, NodeKind, parse};

fn label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Procedure { name } => name.clone(),
        NodeKind::Lambda => "λ".to_string(),
        NodeKind::Identifier { name } => name.clone(),
        NodeKind::StringLiteral { value } => format!("\"{value}\""),
        NodeKind::NumericLiteral { value } => value.clone(),
        NodeKind::BooleanLiteral { value } => if *value { "#t" } else { "#f" }.to_string(),
    }
}

fn grid(source: &str) -> String {
    let parsed = parse(source).unwrap();
    let root = LayoutNode::build(&parsed.item);
    invariants::check(&root);

    root.depth_rows()
        .iter()
        .map(|row| {
            let mut cells = vec!["·".to_string(); root.width];
            for node in row {
                cells[node.offset] = label(&node.kind);
            }
            cells.join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn fixture_arithmetic() {
    insta::assert_snapshot!("arithmetic", grid("(+ 1 (* 2 3))"));
}

#[test]
fn fixture_lambda() {
    insta::assert_snapshot!("lambda", grid("(lambda (x y) (+ x y))"));
}

#[test]
fn fixture_literals() {
    insta::assert_snapshot!("literals", grid("(f (now) \"hi\" #t)"));
}

#[test]
fn fixture_chain() {
    insta::assert_snapshot!("chain", grid("(a (b (c d)))"));
}
