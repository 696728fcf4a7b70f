use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub out_dir: PathBuf,
    /// Artifacts written (or out of date, with `--check`).
    pub written: Vec<String>,
    pub unchanged: usize,
    /// Stale generated files removed (or that would be removed).
    pub removed: Vec<String>,
    pub is_check: bool,
    /// True when errors prevented writing anything.
    pub skipped: bool,
}

impl GenerateSummary {
    pub fn is_stale(&self) -> bool {
        self.is_check && (!self.written.is_empty() || !self.removed.is_empty())
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running textloc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All diagnostics of the build, sorted.
    /// Empty for `init`.
    pub issues: Vec<Issue>,
    /// Number of translation files that were compiled.
    pub files_checked: usize,
}
