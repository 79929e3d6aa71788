//! Go source parsing.
//!
//! tree-sitter keeps exact byte positions for every node, so comments and
//! formatting of untouched code are recoverable byte-for-byte when the
//! rewriter serializes a file back out.

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Parser, Tree};

/// Parse Go source into a syntax tree.
///
/// tree-sitter is error-tolerant, but a tree containing error nodes cannot be
/// rewritten safely, so any syntax error fails the parse for this file.
pub fn parse_go_source(src: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::language())
        .context("Failed to load the Go grammar")?;

    let tree = parser
        .parse(src, None)
        .ok_or_else(|| anyhow!("Go parser produced no tree"))?;

    if tree.root_node().has_error() {
        let line = first_error_line(tree.root_node()).unwrap_or(1);
        return Err(anyhow!("Go syntax error at line {}", line));
    }

    Ok(tree)
}

/// The source text a node spans.
pub fn node_text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    node.utf8_text(src.as_bytes()).unwrap_or_default()
}

fn first_error_line(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}
