//! Swift grammar configuration and parsing
//!
//! The single place that touches the tree-sitter parser. Everything else in
//! the crate consumes an already-built tree.

use tree_sitter::{Node, Parser, Tree};

use crate::error::ParseError;

/// Tree-sitter language handle for Swift.
pub fn swift_language() -> tree_sitter::Language {
    tree_sitter_swift::LANGUAGE.into()
}

/// Parse Swift source text into a syntax tree.
///
/// Tree-sitter is error-tolerant and will happily produce a tree full of
/// `ERROR` nodes for garbage input, so a successful parse is additionally
/// required to be free of error and missing nodes. Malformed input yields
/// [`ParseError::Syntax`] with the position of the first offending node and
/// no partial result.
pub fn parse_source(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&swift_language())?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

    let root = tree.root_node();
    if root.has_error() {
        let offending = first_error_node(root).unwrap_or(root);
        let pos = offending.start_position();
        return Err(ParseError::Syntax {
            line: pos.row + 1,
            column: pos.column,
        });
    }

    Ok(tree)
}

/// Depth-first search for the first `ERROR` or missing node.
fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}
