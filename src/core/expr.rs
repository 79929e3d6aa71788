//! A minimal Go expression model for constructed replacement nodes.
//!
//! The rewriter never mutates parsed tree-sitter nodes; everything it inserts
//! into a file is built from this closed set of shapes and rendered to source
//! text. Expressions lifted out of the original file are carried as
//! `Verbatim` slices so their spelling survives unchanged.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoExpr {
    /// A bare identifier, e.g. `ctx` or `int`.
    Ident(String),
    /// A package-qualified name, e.g. `slog.LevelInfo`.
    Selector { pkg: String, name: String },
    /// An interpreted string literal. The value is unquoted; rendering adds
    /// quotes and escapes.
    StrLit(String),
    /// A call expression, e.g. `slog.Int("num", 42)` or `int(x)`.
    Call { func: Box<GoExpr>, args: Vec<GoExpr> },
    /// An expression copied byte-for-byte from the input source.
    Verbatim(String),
}

impl GoExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        GoExpr::Ident(name.into())
    }

    pub fn selector(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        GoExpr::Selector {
            pkg: pkg.into(),
            name: name.into(),
        }
    }

    pub fn str_lit(value: impl Into<String>) -> Self {
        GoExpr::StrLit(value.into())
    }

    pub fn call(func: GoExpr, args: Vec<GoExpr>) -> Self {
        GoExpr::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn verbatim(src: impl Into<String>) -> Self {
        GoExpr::Verbatim(src.into())
    }

    /// Wrap an expression in an explicit conversion, e.g. `int(x)`.
    pub fn converted(conv: &str, arg: GoExpr) -> Self {
        GoExpr::call(GoExpr::ident(conv), vec![arg])
    }
}

impl fmt::Display for GoExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoExpr::Ident(name) => write!(f, "{}", name),
            GoExpr::Selector { pkg, name } => write!(f, "{}.{}", pkg, name),
            GoExpr::StrLit(value) => {
                write!(f, "\"")?;
                for c in value.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            GoExpr::Call { func, args } => {
                write!(f, "{}(", func)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            GoExpr::Verbatim(src) => write!(f, "{}", src),
        }
    }
}
