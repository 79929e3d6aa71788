//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Slogmig
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `migrate`: Rewrite zerolog call chains and imports (dry-run by default)
//! - `init`: Initialize slogmig configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Migrate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing Go sources to process
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually overwrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Placeholder expression for the context argument (overrides config file)
    #[arg(long)]
    pub context_arg: Option<String>,
}

#[derive(Debug, Args)]
pub struct MigrateCommand {
    #[command(flatten)]
    pub args: MigrateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite zerolog call chains to slog.LogAttrs and swap the import
    Migrate(MigrateCommand),
    /// Initialize a new .slogmigrc.json configuration file
    Init,
}
