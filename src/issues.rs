//! Issue types for scan and write results.
//!
//! Issues are the non-fatal problems of a run: the action completes, but
//! every skipped file or ledger entry is reported here instead of being
//! dropped silently.

use enum_dispatch::enum_dispatch;

use crate::core::DriftReason;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnreadableFile,
    Drift,
    TranslationFailure,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnreadableFile => write!(f, "unreadable-file"),
            Rule::Drift => write!(f, "drift"),
            Rule::TranslationFailure => write!(f, "translation-failure"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// File that could not be read (permissions, non-UTF-8 content).
///
/// Raised by scan for source files and by write for destination files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFileIssue {
    pub path: String,
    pub reason: String,
}

impl UnreadableFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnreadableFile
    }
}

/// Ledger entry whose line no longer holds a comment in the destination copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftIssue {
    pub path: String,
    pub line: usize,
    /// Comment text recorded in the ledger.
    pub text: String,
    pub reason: DriftReason,
}

impl DriftIssue {
    /// A vanished file loses every entry recorded for it, so it is an error.
    pub fn severity(&self) -> Severity {
        match self.reason {
            DriftReason::MissingFile => Severity::Error,
            _ => Severity::Warning,
        }
    }

    pub fn rule() -> Rule {
        Rule::Drift
    }
}

/// Translator failed for an entry; the line was left untranslated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailureIssue {
    pub path: String,
    pub line: usize,
    pub text: String,
    pub error: String,
}

impl TranslationFailureIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::TranslationFailure
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnreadableFile(UnreadableFileIssue),
    Drift(DriftIssue),
    TranslationFailure(TranslationFailureIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLocation<'a> {
    /// A line inside a file (ledger entries).
    Line { path: &'a str, line: usize },
    /// File-level only.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn path(&self) -> &str {
        match self {
            ReportLocation::Line { path, .. } | ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Line { line, .. } => *line,
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnreadableFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File { path: &self.path }
    }

    fn message(&self) -> String {
        self.reason.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("the file was skipped; make it readable as UTF-8 and run again")
    }
}

impl Report for DriftIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.reason.to_string()
    }

    fn report_severity(&self) -> Severity {
        self.severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("recorded comment: \"{}\"", self.text))
    }

    fn hint(&self) -> Option<&str> {
        Some("the source changed since the scan; scan again into a fresh review file")
    }
}

impl Report for TranslationFailureIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("left untranslated: \"{}\"", self.text))
    }

    fn hint(&self) -> Option<&str> {
        Some("fill in the translation column of the review file to bypass the translator")
    }
}
