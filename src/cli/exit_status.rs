use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed, no error-severity diagnostics
/// - `Failure` (1): Build errors, stale artifacts under `--check`, or `init` refused
/// - `Error` (2): Command failed due to internal error (config error, I/O, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        let stale = matches!(&result.summary, CommandSummary::Generate(s) if s.is_stale());
        if result.error_count > 0 || stale {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
