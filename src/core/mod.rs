//! Core rewrite engine.
//!
//! The engine is a pure in-memory pipeline: parse one Go file, collect a
//! replacement map in a single traversal, apply it in a second pass, and hand
//! back the serialized text. No I/O happens here; the CLI layer owns file
//! discovery and writing.

pub mod chain;
pub mod expr;
pub mod fields;
pub mod file_scanner;
pub mod levels;
pub mod matcher;
pub mod parser;
pub mod rewrite;

pub use rewrite::{RewriteOptions, RewriteOutcome, SkippedChain, rewrite_source};
