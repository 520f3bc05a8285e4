use std::path::PathBuf;

use crate::issues::{Issue, Report};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Write(WriteSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub paths_skipped: usize,
    pub comments_found: usize,
    pub rows_appended: usize,
    pub duplicates: usize,
    pub ledger_path: PathBuf,
}

#[derive(Debug)]
pub struct WriteSummary {
    pub entries: usize,
    pub files_copied: usize,
    pub translated: usize,
    pub files_modified: usize,
    pub dest: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a comtrans action.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Non-fatal problems: skipped files, drifted lines, failed translations.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, mut issues: Vec<Issue>) -> Self {
        sort_issues(&mut issues);
        Self { summary, issues }
    }
}

fn sort_issues(issues: &mut [Issue]) {
    // Stable: entries at the same location keep ledger order.
    issues.sort_by(|a, b| {
        let (a, b) = (a.location(), b.location());
        (a.path(), a.line()).cmp(&(b.path(), b.line()))
    });
}
