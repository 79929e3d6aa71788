use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::MigrateCommand;
use super::{CommandResult, CommandSummary, FileOutcome, MigrateSummary, ParseFailure};
use crate::{
    config::Config,
    core::{RewriteOptions, file_scanner::scan_files, rewrite_source},
};

pub fn migrate(cmd: MigrateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let base_dir = args.common.path.to_string_lossy().to_string();

    let config = Config::load_or_default(&args.common.path)?;
    let opts = RewriteOptions {
        context_arg: args
            .context_arg
            .clone()
            .unwrap_or_else(|| config.context_arg.clone()),
        default_message: config.default_message.clone(),
    };

    let scan = scan_files(
        &base_dir,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        args.common.verbose,
    );
    let mut files: Vec<String> = scan.files.into_iter().collect();
    files.sort();
    let source_files_checked = files.len();

    // Each file's rewrite is independent; no state is shared across files.
    let results: Vec<Result<FileOutcome, ParseFailure>> = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path).map_err(|e| ParseFailure {
                path: path.clone(),
                error: e.to_string(),
            })?;
            let outcome = rewrite_source(&source, &opts).map_err(|e| ParseFailure {
                path: path.clone(),
                error: e.to_string(),
            })?;
            Ok(FileOutcome {
                path: path.clone(),
                outcome,
            })
        })
        .collect();

    let mut outcomes: Vec<FileOutcome> = Vec::new();
    let mut parse_failures: Vec<ParseFailure> = Vec::new();
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(failure) => parse_failures.push(failure),
        }
    }

    if args.apply {
        for file in outcomes.iter().filter(|f| f.outcome.changed()) {
            fs::write(&file.path, &file.outcome.output)
                .with_context(|| format!("Failed to write {}", file.path))?;
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Migrate(MigrateSummary {
            is_apply: args.apply,
            outcomes,
        }),
        parse_failures,
        source_files_checked,
    })
}
