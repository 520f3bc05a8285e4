//! The two phases of a translation run.
//!
//! ```text
//! scan:  walker::enumerate → locator::extract (per file) → ledger::append
//! write: ledger::read_all → copy_tree → translate → SourceText::replace_comment
//! ```
//!
//! Both phases are sequential. Per-file and per-entry problems become
//! [`Issue`]s; only errors that would leave an untrustworthy ledger or a
//! half-written destination abort the phase.

use std::{
    collections::{BTreeMap, HashSet, btree_map::Entry},
    fs, io,
    path::Path,
};

use colored::Colorize;

use super::copy::copy_tree;
use super::error::{Error, Result};
use super::ledger::{self, LedgerEntry};
use super::locator::{self, relative_path};
use super::script::ScriptPredicate;
use super::source_text::{DriftReason, SourceText};
use super::translator::{Translator, translate_with_retries};
use super::walker;
use crate::issues::{DriftIssue, Issue, TranslationFailureIssue, UnreadableFileIssue};

pub struct ScanOptions<'a> {
    pub source_root: &'a Path,
    pub ledger_path: &'a Path,
    pub extensions: &'a [String],
    pub ignores: &'a [String],
    pub predicate: &'a ScriptPredicate,
    pub verbose: bool,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files_scanned: usize,
    /// Paths the walker could not access.
    pub paths_skipped: usize,
    pub comments_found: usize,
    pub rows_appended: usize,
    /// Comments already present in the ledger at the same (path, line).
    pub duplicates: usize,
    pub issues: Vec<Issue>,
}

pub fn scan(options: &ScanOptions) -> Result<ScanOutcome> {
    let walk = walker::enumerate(
        options.source_root,
        options.extensions,
        options.ignores,
        options.verbose,
    )?;
    let mut existing = ledger::existing_keys(options.ledger_path)?;

    let mut outcome = ScanOutcome {
        paths_skipped: walk.skipped_count,
        ..Default::default()
    };
    let mut entries: Vec<LedgerEntry> = Vec::new();

    for file in &walk.files {
        let records = match locator::extract(options.source_root, file, options.predicate) {
            Ok(records) => records,
            Err(Error::UnreadableFile { reason, .. }) => {
                outcome.issues.push(Issue::UnreadableFile(UnreadableFileIssue {
                    path: relative_path(options.source_root, file),
                    reason,
                }));
                continue;
            }
            Err(e) => return Err(e),
        };

        outcome.files_scanned += 1;
        outcome.comments_found += records.len();
        if options.verbose && !records.is_empty() {
            eprintln!(
                "{} {} ({} comments)",
                "scanned".dimmed(),
                relative_path(options.source_root, file),
                records.len()
            );
        }

        for record in records {
            if existing.insert((record.path.clone(), record.line)) {
                entries.push(record.into());
            } else {
                outcome.duplicates += 1;
            }
        }
    }

    ledger::append(options.ledger_path, &entries)?;
    outcome.rows_appended = entries.len();
    Ok(outcome)
}

pub struct WriteOptions<'a> {
    pub source_root: &'a Path,
    pub dest_root: &'a Path,
    pub ledger_path: &'a Path,
    pub from: &'a str,
    pub to: &'a str,
    /// Extra translator attempts per entry.
    pub retries: usize,
    pub verbose: bool,
}

#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub entries: usize,
    pub files_copied: usize,
    pub translated: usize,
    pub files_modified: usize,
    pub issues: Vec<Issue>,
}

/// Copy the source tree and write translations into the copy.
///
/// `translator` may be `None` when every entry carries a manual translation.
/// The ledger is read and checked before anything is copied, so a malformed
/// ledger leaves no destination tree behind.
pub fn write(options: &WriteOptions, translator: Option<&dyn Translator>) -> Result<WriteOutcome> {
    if !options.source_root.exists() {
        return Err(Error::PathNotFound(options.source_root.to_path_buf()));
    }
    if options.dest_root.exists() {
        return Err(Error::DestinationExists(options.dest_root.to_path_buf()));
    }

    let entries = ledger::read_all(options.ledger_path)?;
    let needs_translator = entries.iter().filter(|e| e.translation.is_none()).count();
    if translator.is_none() && needs_translator > 0 {
        return Err(Error::TranslatorMissing(needs_translator));
    }

    let files_copied = copy_tree(
        options.source_root,
        options.dest_root,
        &[options.ledger_path.to_path_buf()],
    )?;

    let mut outcome = WriteOutcome {
        entries: entries.len(),
        files_copied,
        ..Default::default()
    };

    // Each destination file is loaded once.
    let mut files: BTreeMap<String, DestFile> = BTreeMap::new();
    let mut modified: HashSet<String> = HashSet::new();

    for entry in &entries {
        let source = match files.entry(entry.path.clone()) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                let loaded = match load(&options.dest_root.join(&entry.path)) {
                    Ok(text) => DestFile::Text(text),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => DestFile::Missing,
                    Err(e) => {
                        outcome.issues.push(Issue::UnreadableFile(UnreadableFileIssue {
                            path: entry.path.clone(),
                            reason: e.to_string(),
                        }));
                        DestFile::Unreadable
                    }
                };
                vacant.insert(loaded)
            }
        };

        let drift = match &*source {
            DestFile::Text(text) => text.comment_at(entry.line).err(),
            DestFile::Missing => Some(DriftReason::MissingFile),
            // Reported once for the whole file.
            DestFile::Unreadable => continue,
        };
        if let Some(reason) = drift {
            outcome.issues.push(Issue::Drift(DriftIssue {
                path: entry.path.clone(),
                line: entry.line,
                text: entry.text.clone(),
                reason,
            }));
            continue;
        }

        let translation = match (&entry.translation, translator) {
            (Some(manual), _) => manual.clone(),
            (None, Some(translator)) => match translate_with_retries(
                translator,
                &entry.text,
                options.from,
                options.to,
                options.retries,
            ) {
                Ok(translation) => translation,
                Err(e) => {
                    outcome
                        .issues
                        .push(Issue::TranslationFailure(TranslationFailureIssue {
                            path: entry.path.clone(),
                            line: entry.line,
                            text: entry.text.clone(),
                            error: e.to_string(),
                        }));
                    continue;
                }
            },
            (None, None) => continue,
        };

        if let DestFile::Text(text) = &mut *source
            && text.replace_comment(entry.line, &translation).is_ok()
        {
            outcome.translated += 1;
            modified.insert(entry.path.clone());
            if options.verbose {
                eprintln!(
                    "{} {}:{} {}",
                    "translated".dimmed(),
                    entry.path,
                    entry.line,
                    translation
                );
            }
        }
    }

    for (path, file) in &files {
        if let DestFile::Text(text) = file
            && modified.contains(path)
        {
            fs::write(options.dest_root.join(path), text.render())?;
        }
    }
    outcome.files_modified = modified.len();

    Ok(outcome)
}

enum DestFile {
    Text(SourceText),
    Missing,
    Unreadable,
}

fn load(path: &Path) -> io::Result<SourceText> {
    fs::read_to_string(path).map(|content| SourceText::parse(&content))
}
