//! Statement Matcher: classify one syntax node and decide its replacement.
//!
//! Exactly two node shapes are convertible: the zerolog import spec, and an
//! expression statement whose call chain terminates in `Msg`/`Msgf`/`Send`.
//! Everything else passes through. A statement that is terminator-shaped but
//! fails extraction is a `Skip`: it stays untouched in the output and is only
//! surfaced as a verbose-mode note.

use tree_sitter::Node;

use super::chain::{ChainEntry, Terminator, call_args, extract_chain};
use super::expr::GoExpr;
use super::parser::node_text;
use super::rewrite::RewriteOptions;

pub const ZEROLOG_IMPORT_PATH: &str = "\"github.com/rs/zerolog/log\"";
pub const SLOG_IMPORT_PATH: &str = "\"log/slog\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementKind {
    Import,
    Call,
}

/// Rendered replacement text for one original node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub kind: ReplacementKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Replace the node's byte span with the rendered text.
    Replace(Replacement),
    /// A terminator-shaped statement that did not extract; left untouched.
    Skip,
    /// Not a convertible node at all.
    Pass,
}

pub fn match_node(node: Node<'_>, src: &str, opts: &RewriteOptions) -> Decision {
    match node.kind() {
        "import_spec" => match_import(node, src),
        "expression_statement" => match_call_statement(node, src, opts),
        _ => Decision::Pass,
    }
}

fn match_import(spec: Node<'_>, src: &str) -> Decision {
    let Some(path) = spec.child_by_field_name("path") else {
        return Decision::Pass;
    };
    if node_text(path, src) != ZEROLOG_IMPORT_PATH {
        return Decision::Pass;
    }
    // The whole spec is replaced, so an alias name would be dropped along
    // with the old path. Comments sit outside the spec's span and survive.
    Decision::Replace(Replacement {
        kind: ReplacementKind::Import,
        text: SLOG_IMPORT_PATH.to_string(),
    })
}

fn match_call_statement(stmt: Node<'_>, src: &str, opts: &RewriteOptions) -> Decision {
    let Some(call) = stmt.named_child(0) else {
        return Decision::Pass;
    };
    if call.kind() != "call_expression" {
        return Decision::Pass;
    }
    let Some(func) = call.child_by_field_name("function") else {
        return Decision::Pass;
    };
    if func.kind() != "selector_expression" {
        return Decision::Pass;
    }
    let Some(sel) = func.child_by_field_name("field") else {
        return Decision::Pass;
    };
    let Some(terminator) = Terminator::from_name(node_text(sel, src)) else {
        return Decision::Pass;
    };
    let Some(inner) = func.child_by_field_name("operand") else {
        return Decision::Pass;
    };
    if inner.kind() != "call_expression" {
        return Decision::Pass;
    }

    let term_args = call_args(call);
    match extract_chain(inner, terminator, &term_args, src, &opts.default_message) {
        Some(entry) => Decision::Replace(Replacement {
            kind: ReplacementKind::Call,
            text: build_log_attrs_call(&entry, opts).to_string(),
        }),
        None => Decision::Skip,
    }
}

/// `slog.LogAttrs(<context>, slog.<Level>, <message>, <fields...>)`.
///
/// The context argument is a bare placeholder; the rewriter never tries to
/// find a real context value in the enclosing scope, so a human pass over the
/// output is expected.
fn build_log_attrs_call(entry: &ChainEntry, opts: &RewriteOptions) -> GoExpr {
    let mut args = vec![
        GoExpr::verbatim(opts.context_arg.clone()),
        GoExpr::selector("slog", entry.level.slog_constant()),
        entry.message.clone(),
    ];
    args.extend(entry.fields.iter().cloned());
    GoExpr::call(GoExpr::selector("slog", "LogAttrs"), args)
}
