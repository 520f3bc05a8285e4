//! The review ledger: a CSV file of comments awaiting human review.
//!
//! Rows are `path,line,text,translation`. The scan phase only ever appends;
//! the reviewer deletes false positives, corrects text, or fills in the
//! translation column by hand. The write phase reads it back and treats any
//! row it cannot parse as fatal.

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Component, Path},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::error::{Error, Result};
use super::locator::CommentRecord;

pub const DEFAULT_LEDGER_FILE: &str = "review.csv";

const HEADER: [&str; 4] = ["path", "line", "text", "translation"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub path: String,
    pub line: usize,
    pub text: String,
    /// Filled in by the reviewer to bypass the translator for this row.
    pub translation: Option<String>,
}

impl From<CommentRecord> for LedgerEntry {
    fn from(record: CommentRecord) -> Self {
        Self {
            path: record.path,
            line: record.line,
            text: record.text,
            translation: None,
        }
    }
}

/// Append entries to the ledger, creating it (with a header row) if needed.
pub fn append(path: &Path, entries: &[LedgerEntry]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;

    let len = file.metadata()?.len();
    if len > 0 && !ends_with_newline(&mut file, len)? {
        // Hand-edited files often lose their final newline.
        file.write_all(b"\n")?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if len == 0 {
        writer.write_record(HEADER)?;
    }
    for entry in entries {
        let line = entry.line.to_string();
        writer.write_record([
            entry.path.as_str(),
            line.as_str(),
            entry.text.as_str(),
            entry.translation.as_deref().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every row of the ledger, in file order.
pub fn read_all(path: &Path) -> Result<Vec<LedgerEntry>> {
    if !path.is_file() {
        return Err(Error::LedgerNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index as u64 + 1;
        let malformed = |reason: String| Error::MalformedLedger {
            path: path.to_path_buf(),
            row,
            reason,
        };

        let record = result.map_err(|e| malformed(e.to_string()))?;
        if index == 0 && is_header(&record) {
            continue;
        }
        entries.push(parse_row(&record).map_err(malformed)?);
    }
    Ok(entries)
}

/// The `(path, line)` pairs already recorded. A missing ledger has none.
pub fn existing_keys(path: &Path) -> Result<HashSet<(String, usize)>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    Ok(read_all(path)?
        .into_iter()
        .map(|entry| (entry.path, entry.line))
        .collect())
}

fn ends_with_newline(file: &mut File, len: u64) -> Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn is_header(record: &StringRecord) -> bool {
    record.get(0) == Some(HEADER[0]) && record.get(1) == Some(HEADER[1])
}

fn parse_row(record: &StringRecord) -> std::result::Result<LedgerEntry, String> {
    if !(3..=4).contains(&record.len()) {
        return Err(format!("expected 3 or 4 fields, found {}", record.len()));
    }

    let path = &record[0];
    if path.trim().is_empty() {
        return Err("empty file path".to_string());
    }
    let escapes_root = Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes_root {
        return Err(format!("path '{}' is not relative to the source root", path));
    }

    let line: usize = record[1]
        .trim()
        .parse()
        .map_err(|_| format!("invalid line number '{}'", &record[1]))?;
    if line == 0 {
        return Err("line numbers start at 1".to_string());
    }

    let translation = record
        .get(3)
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string);

    Ok(LedgerEntry {
        path: path.to_string(),
        line,
        text: record[2].to_string(),
        translation,
    })
}
