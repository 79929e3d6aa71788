//! Slogmig - zerolog to log/slog migrator for Go projects
//!
//! Slogmig is a CLI tool and library that rewrites fluent zerolog call chains
//! (`log.Info().Str("k", v).Msg("...")`) into flat `slog.LogAttrs` calls and
//! swaps the zerolog import for `log/slog`. Code it does not rewrite is
//! preserved byte-for-byte, comments included.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Rewrite engine (parse, match, extract, replace, serialize)

pub mod cli;
pub mod config;
pub mod core;
