//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style, followed by a one-line summary of the
//! action. Kept separate from the pipeline so comtrans can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary, WriteSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues to stderr and the summary to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    report_issues_to(&result.issues, &mut io::stderr().lock());
    print_summary_to(result, verbose, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_issues_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

/// Print the action summary to a custom writer.
pub fn print_summary_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    let errors = count_severity(&result.issues, Severity::Error);
    let warnings = count_severity(&result.issues, Severity::Warning);

    match &result.summary {
        CommandSummary::Scan(summary) => print_scan_summary(summary, verbose, writer),
        CommandSummary::Write(summary) => print_write_summary(summary, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }

    let mut problems = Vec::new();
    if errors > 0 {
        problems.push(
            format!("{} {}", errors, plural(errors, "error", "errors"))
                .red()
                .to_string(),
        );
    }
    if warnings > 0 {
        problems.push(
            format!("{} {}", warnings, plural(warnings, "warning", "warnings"))
                .yellow()
                .to_string(),
        );
    }
    if !problems.is_empty() {
        let mark = if errors > 0 {
            FAILURE_MARK.red()
        } else {
            FAILURE_MARK.yellow()
        };
        let _ = writeln!(writer, "{} {}", mark, problems.join(", "));
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Line { path, line } => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

fn print_scan_summary<W: Write>(summary: &ScanSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}, found {} {}",
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.comments_found,
            plural(summary.comments_found, "comment", "comments"),
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "  Appended {} {} to {}",
        summary.rows_appended,
        plural(summary.rows_appended, "row", "rows"),
        summary.ledger_path.display()
    );
    if summary.duplicates > 0 {
        let _ = writeln!(
            writer,
            "  Skipped {} already in the review file",
            summary.duplicates
        );
    }
    if summary.paths_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            summary.paths_skipped,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

fn print_write_summary<W: Write>(summary: &WriteSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Copied {} {} to {}",
            summary.files_copied,
            plural(summary.files_copied, "file", "files"),
            summary.dest.display()
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "  Translated {} of {} {} in {} {}",
        summary.translated,
        summary.entries,
        plural(summary.entries, "entry", "entries"),
        summary.files_modified,
        plural(summary.files_modified, "file", "files")
    );
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

fn count_severity(issues: &[Issue], severity: Severity) -> usize {
    issues
        .iter()
        .filter(|i| i.report_severity() == severity)
        .count()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
