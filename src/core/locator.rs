//! Finds `//` comments written in the source language.
//!
//! The comment starts after the **last** marker on the line, so a marker
//! inside an earlier string literal is not mistaken for the comment start.
//! Block comments and markers inside literals that follow the real comment
//! are not recognized.

use std::{fs, path::Path};

use super::error::{Error, Result};
use super::script::ScriptPredicate;

pub const COMMENT_MARKER: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// Path relative to the scanned root, `/`-separated.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// Comment text after the marker, trimmed.
    pub text: String,
}

/// Split a line into the code up to and including the last comment marker,
/// and the raw comment that follows it.
pub fn split_comment(line: &str) -> Option<(&str, &str)> {
    let start = line.rfind(COMMENT_MARKER)? + COMMENT_MARKER.len();
    Some(line.split_at(start))
}

pub fn extract(root: &Path, file: &Path, predicate: &ScriptPredicate) -> Result<Vec<CommentRecord>> {
    let content = fs::read_to_string(file).map_err(|e| Error::UnreadableFile {
        path: file.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(extract_from_str(
        &relative_path(root, file),
        &content,
        predicate,
    ))
}

pub fn extract_from_str(
    path: &str,
    content: &str,
    predicate: &ScriptPredicate,
) -> Vec<CommentRecord> {
    content
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let (_, comment) = split_comment(line)?;
            let text = comment.trim();
            predicate.matches(text).then(|| CommentRecord {
                path: path.to_string(),
                line: index + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Path of `file` relative to `root`, joined with `/` on every platform.
pub fn relative_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
