//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow textloc to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, location, source context,
/// and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} translation {} - no issues found",
        files,
        if files == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Generate(summary) => {
            report_to(&result.issues, stdout);
            print_generate_to(summary, verbose, stdout);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let mut source = None;
    match &loc {
        ReportLocation::Message(ctx) if ctx.location.has_line() => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            source = ctx.source_line.as_deref().map(|s| (s, ctx.line(), ctx.col()));
        }
        ReportLocation::Message(ctx) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), ctx.file_path());
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::Build => {}
    }

    if let Some((source_line, line, col)) = source {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) if ctx.source_line.is_some() => Some(ctx.line()),
            _ => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_generate_to<W: Write>(summary: &GenerateSummary, verbose: bool, writer: &mut W) {
    let out_dir = summary.out_dir.display();

    if summary.skipped {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Build has errors, nothing written to {}", out_dir).red()
        );
        return;
    }

    if summary.is_check {
        if !summary.is_stale() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Generated sources in {} are up to date", out_dir).green()
            );
            return;
        }
        let _ = writeln!(
            writer,
            "{} generated sources in {} are out of date:",
            "Stale".yellow().bold(),
            out_dir
        );
        for name in &summary.written {
            let _ = writeln!(writer, "  - would write {}", name);
        }
        for name in &summary.removed {
            let _ = writeln!(writer, "  - would remove {}", name);
        }
        let _ = writeln!(
            writer,
            "Run {} without {} to update them.",
            "textloc generate".cyan(),
            "--check".cyan()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {} ({} unchanged)",
            summary.written.len(),
            if summary.written.len() == 1 {
                "file"
            } else {
                "files"
            },
            out_dir,
            summary.unchanged
        )
        .green()
    );
    if verbose {
        for name in &summary.written {
            let _ = writeln!(writer, "  - {}", name);
        }
    }
    for name in &summary.removed {
        let _ = writeln!(writer, "{} {}", "Removed".yellow().bold(), name);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}
