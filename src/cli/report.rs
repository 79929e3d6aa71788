//! Report formatting and printing utilities.
//!
//! Summaries follow the dry-run/apply wording of the commands; unconverted
//! chains are rendered as cargo-style notes so the remaining manual work is
//! easy to find. Separate from core logic so slogmig can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, FileOutcome, InitSummary, MigrateSummary, ParseFailure,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SkippedChain;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_parse_warnings_to(&result.parse_failures, verbose, &mut io::stderr().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Migrate(summary) => {
            print_migrate(summary, result.source_files_checked, verbose, writer);
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_migrate<W: Write>(
    summary: &MigrateSummary,
    files_checked: usize,
    verbose: bool,
    writer: &mut W,
) {
    let calls = summary.calls_rewritten();
    let imports = summary.imports_rewritten();
    let files_changed = summary.files_changed();
    let skipped = summary.skipped_count();

    if verbose {
        for file in summary.outcomes.iter().filter(|f| f.outcome.changed()) {
            let _ = writeln!(
                writer,
                "  - {}: {} call(s), {} import(s)",
                file.path, file.outcome.calls_rewritten, file.outcome.imports_rewritten
            );
        }
        print_skipped_notes(&summary.outcomes, writer);
    }

    if skipped > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} chain(s) could not be converted automatically (use {} for details)",
            "note:".bold(),
            skipped,
            "-v".cyan()
        );
    }

    if calls + imports == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} Go {} - nothing to migrate",
                files_checked,
                if files_checked == 1 { "file" } else { "files" }
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} call(s) and {} import(s) in {} file(s).",
            "Rewrote".green().bold(),
            calls,
            imports,
            files_changed
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} call(s) and {} import(s) in {} file(s).",
            "Would rewrite".yellow().bold(),
            calls,
            imports,
            files_changed
        );
        let _ = writeln!(
            writer,
            "Run with {} to rewrite these files.",
            "--apply".cyan()
        );
    }
}

fn print_skipped_notes<W: Write>(outcomes: &[FileOutcome], writer: &mut W) {
    for file in outcomes {
        for skip in &file.outcome.skipped {
            print_skipped_note(&file.path, skip, writer);
        }
    }
}

fn print_skipped_note<W: Write>(path: &str, skip: &SkippedChain, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        "note:".bold(),
        "unconverted zerolog chain"
    );
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, skip.line, skip.col);

    let line_str = skip.line.to_string();
    let width = line_str.len().max(3);
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line_str.blue(),
        "|".blue(),
        skip.source_line,
        width = width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = skip
        .source_line
        .chars()
        .take(skip.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = width,
        padding = caret_padding
    );
    let _ = writeln!(writer);
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warnings_to<W: Write>(
    failures: &[ParseFailure],
    verbose: bool,
    writer: &mut W,
) {
    if failures.is_empty() {
        return;
    }

    if verbose {
        for failure in failures {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                failure.path,
                failure.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            failures.len(),
            "-v".cyan()
        );
    }
}

// ============================================================
// Tests
// ============================================================
