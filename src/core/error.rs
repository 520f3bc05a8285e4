use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("destination {} is inside the source tree", .0.display())]
    DestinationInsideSource(PathBuf),
    #[error("cannot read {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },
    #[error("review file not found: {}", .0.display())]
    LedgerNotFound(PathBuf),
    #[error("malformed review file {} (row {row}): {reason}", path.display())]
    MalformedLedger {
        path: PathBuf,
        row: u64,
        reason: String,
    },
    #[error("unsupported source language '{0}' (add a pattern for it under \"scripts\")")]
    UnsupportedLanguage(String),
    #[error("invalid script pattern for '{lang}': {source}")]
    InvalidScript {
        lang: String,
        #[source]
        source: regex::Error,
    },
    #[error("no translator configured but {0} review entries have no manual translation")]
    TranslatorMissing(usize),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
