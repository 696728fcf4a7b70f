use anyhow::Result;

use super::super::args::GenerateCommand;
use super::{CommandResult, CommandSummary, GenerateSummary, helper::finish};
use crate::{
    artifact_writer::{WriteMode, write_artifacts},
    core::context::BuildContext,
    issues::Severity,
};

/// Compile and sync the output directory.
///
/// Nothing is written while error-severity diagnostics are present, so a
/// broken declaration never deletes a previously generated table.
pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = BuildContext::new(&args.common)?;
    let issues = ctx.diagnostics();

    let mode = if args.check {
        WriteMode::Check
    } else {
        WriteMode::Write
    };

    let has_errors = issues.iter().any(|i| i.severity() == Severity::Error);
    let summary = if has_errors {
        tracing::debug!("skipping write because of build errors");
        GenerateSummary {
            out_dir: ctx.out_dir.clone(),
            written: Vec::new(),
            unchanged: 0,
            removed: Vec::new(),
            is_check: args.check,
            skipped: true,
        }
    } else {
        let report = write_artifacts(&ctx.out_dir, &ctx.output().artifacts, mode)?;
        GenerateSummary {
            out_dir: ctx.out_dir.clone(),
            written: report.written,
            unchanged: report.unchanged.len(),
            removed: report.removed,
            is_check: args.check,
            skipped: false,
        }
    };

    Ok(finish(
        CommandSummary::Generate(summary),
        issues,
        ctx.files.len(),
    ))
}
