//! Rewrite Driver: one traversal to collect replacements, one pass to apply
//! them, then serialize.
//!
//! The replacement map is keyed by node identity and written once per node.
//! Application emits original source bytes for everything outside a replaced
//! node's span, so untouched code, comments, and blank lines come through
//! byte-for-byte. A file with no replacements serializes to its exact input.

use std::collections::HashMap;

use anyhow::Result;
use tree_sitter::Node;

use super::matcher::{Decision, Replacement, ReplacementKind, match_node};
use super::parser::parse_go_source;

/// Configured placeholders injected into rewritten calls.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Expression used for the context argument slog requires. Always a
    /// placeholder spelling; never resolved from the enclosing scope.
    pub context_arg: String,
    /// Message literal synthesized for `Send()` terminators.
    pub default_message: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            context_arg: "ctx".to_string(),
            default_message: "zerolog event".to_string(),
        }
    }
}

/// A terminator-shaped statement that could not be converted and was left
/// as-is. Reported as a note so a human can finish the migration by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChain {
    pub line: usize,
    pub col: usize,
    pub source_line: String,
}

#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub output: String,
    pub calls_rewritten: usize,
    pub imports_rewritten: usize,
    pub skipped: Vec<SkippedChain>,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        self.calls_rewritten + self.imports_rewritten > 0
    }
}

/// Rewrite one file's source text in memory.
pub fn rewrite_source(src: &str, opts: &RewriteOptions) -> Result<RewriteOutcome> {
    let tree = parse_go_source(src)?;

    let mut replacements: HashMap<usize, Replacement> = HashMap::new();
    let mut skipped: Vec<SkippedChain> = Vec::new();
    collect(tree.root_node(), src, opts, &mut replacements, &mut skipped);

    let calls_rewritten = replacements
        .values()
        .filter(|r| r.kind == ReplacementKind::Call)
        .count();
    let imports_rewritten = replacements
        .values()
        .filter(|r| r.kind == ReplacementKind::Import)
        .count();

    let output = if replacements.is_empty() {
        src.to_string()
    } else {
        apply(tree.root_node(), src, &replacements)
    };

    Ok(RewriteOutcome {
        output,
        calls_rewritten,
        imports_rewritten,
        skipped,
    })
}

fn collect(
    node: Node<'_>,
    src: &str,
    opts: &RewriteOptions,
    replacements: &mut HashMap<usize, Replacement>,
    skipped: &mut Vec<SkippedChain>,
) {
    match match_node(node, src, opts) {
        Decision::Replace(rep) => {
            // Replaced subtrees are not re-matched.
            replacements.insert(node.id(), rep);
            return;
        }
        Decision::Skip => {
            skipped.push(skipped_chain(node, src));
            return;
        }
        Decision::Pass => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, src, opts, replacements, skipped);
    }
}

fn skipped_chain(node: Node<'_>, src: &str) -> SkippedChain {
    let pos = node.start_position();
    let source_line = src.lines().nth(pos.row).unwrap_or_default().to_string();
    SkippedChain {
        line: pos.row + 1,
        col: pos.column + 1,
        source_line,
    }
}

fn apply(root: Node<'_>, src: &str, replacements: &HashMap<usize, Replacement>) -> String {
    let mut out = String::with_capacity(src.len() + 256);
    let mut last = 0usize;
    emit(root, src, replacements, &mut out, &mut last);
    out.push_str(&src[last..]);
    out
}

fn emit(
    node: Node<'_>,
    src: &str,
    replacements: &HashMap<usize, Replacement>,
    out: &mut String,
    last: &mut usize,
) {
    if let Some(rep) = replacements.get(&node.id()) {
        out.push_str(&src[*last..node.start_byte()]);
        out.push_str(&rep.text);
        *last = node.end_byte();
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        emit(child, src, replacements, out, last);
    }
}
