//! Parsing and tree layout for a Racket-like expression language.
//!
//! [`parse`] turns a program fragment into an [`Item`] tree;
//! [`LayoutNode::build`] turns that tree into a positioned, column-indexed
//! structure a renderer can draw layer by layer.
//!
//! ```
//! use lambdascope_engine::{LayoutNode, parse};
//!
//! let parsed = parse("(f (g a b) c)").unwrap();
//! let tree = LayoutNode::build(&parsed.item);
//! assert_eq!(tree.width, 3);
//! ```

pub mod ast;
pub mod layout;
pub mod parsing;

// Re-export key types for easier usage
pub use ast::{Identifier, Item};
pub use layout::{LayoutNode, NodeKind};
pub use parsing::{ParseError, Parsed, parse, parse_at};
