use crate::core::rewrite::RewriteOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Migrate(MigrateSummary),
    Init(InitSummary),
}

/// Per-file rewrite result, unchanged files included.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: String,
    pub outcome: RewriteOutcome,
}

#[derive(Debug)]
pub struct MigrateSummary {
    pub is_apply: bool,
    /// Sorted by path for deterministic reporting.
    pub outcomes: Vec<FileOutcome>,
}

impl MigrateSummary {
    pub fn files_changed(&self) -> usize {
        self.outcomes.iter().filter(|f| f.outcome.changed()).count()
    }

    pub fn calls_rewritten(&self) -> usize {
        self.outcomes.iter().map(|f| f.outcome.calls_rewritten).sum()
    }

    pub fn imports_rewritten(&self) -> usize {
        self.outcomes
            .iter()
            .map(|f| f.outcome.imports_rewritten)
            .sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().map(|f| f.outcome.skipped.len()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// A file the migrator could not read or parse. Fatal for that file only;
/// the rest of the batch still runs.
#[derive(Debug)]
pub struct ParseFailure {
    pub path: String,
    pub error: String,
}

/// Result of running slogmig commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub parse_failures: Vec<ParseFailure>,
    /// Number of Go source files that were scanned and parsed.
    pub source_files_checked: usize,
}
