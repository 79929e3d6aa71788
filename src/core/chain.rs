//! Chain Extractor: walk a zerolog call chain from its terminator down to the
//! level-establishing call and collect everything the flat call needs.
//!
//! `None` is the ordinary outcome for code that merely looks chain-shaped;
//! the caller leaves such statements untouched. One unrecognized field link
//! anywhere in the chain voids the whole statement (no partial conversions).

use tree_sitter::Node;

use super::expr::GoExpr;
use super::fields::convert_field;
use super::levels::Level;
use super::parser::node_text;

/// The call that finalizes and emits a zerolog event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Msg,
    Msgf,
    Send,
}

impl Terminator {
    pub fn from_name(name: &str) -> Option<Terminator> {
        match name {
            "Msg" => Some(Terminator::Msg),
            "Msgf" => Some(Terminator::Msgf),
            "Send" => Some(Terminator::Send),
            _ => None,
        }
    }
}

/// Everything extracted from one full chain. A successful extraction always
/// carries a message; `Send()` chains get a synthesized default literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub level: Level,
    pub message: GoExpr,
    pub fields: Vec<GoExpr>,
}

/// Walk the chain starting at the terminator's receiver.
///
/// `inner` must be the `call_expression` the terminator was invoked on. The
/// walk proceeds outermost-in, so converted fields are prepended to keep the
/// left-to-right source order. For `Msgf`, only the format string survives:
/// the flat API has no formatting step, so trailing arguments are dropped on
/// purpose.
pub fn extract_chain(
    inner: Node<'_>,
    terminator: Terminator,
    term_args: &[Node<'_>],
    src: &str,
    default_message: &str,
) -> Option<ChainEntry> {
    let message = match terminator {
        Terminator::Msg | Terminator::Msgf => {
            let first = term_args.first()?;
            GoExpr::verbatim(node_text(*first, src))
        }
        Terminator::Send => GoExpr::str_lit(default_message),
    };

    let mut fields: Vec<GoExpr> = Vec::new();
    let mut current = inner;

    let level = loop {
        let func = current.child_by_field_name("function")?;
        if func.kind() != "selector_expression" {
            return None;
        }
        let method = node_text(func.child_by_field_name("field")?, src);
        let receiver = func.child_by_field_name("operand")?;

        if let Some(level) = Level::from_name(method) {
            // Chain root: the level call must sit on the bare logger handle.
            if receiver.kind() != "identifier" {
                return None;
            }
            break level;
        }

        let args: Vec<GoExpr> = call_args(current)
            .iter()
            .map(|arg| GoExpr::verbatim(node_text(*arg, src)))
            .collect();
        let converted = convert_field(method, &args)?;
        fields.insert(0, converted);

        if receiver.kind() != "call_expression" {
            // Chain head stored in a variable, or some other unsupported shape.
            return None;
        }
        current = receiver;
    };

    Some(ChainEntry {
        level,
        message,
        fields,
    })
}

/// Named argument nodes of a call, excluding interleaved comments.
pub(crate) fn call_args<'t>(call: Node<'t>) -> Vec<Node<'t>> {
    let Some(list) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}
