//! Line-addressed editing of a source file for the write phase.

use super::locator::split_comment;

/// Why a ledger entry could not be applied to the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftReason {
    MissingFile,
    LineOutOfRange { line_count: usize },
    NoComment,
}

impl std::fmt::Display for DriftReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriftReason::MissingFile => write!(f, "file no longer exists"),
            DriftReason::LineOutOfRange { line_count } => {
                write!(f, "file has only {} lines", line_count)
            }
            DriftReason::NoComment => write!(f, "line no longer contains a comment"),
        }
    }
}

/// A file split on `\n`. Each line keeps its `\r`, so rendering restores the
/// original bytes except for edited comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        match self.lines.last() {
            Some(last) if last.is_empty() => self.lines.len() - 1,
            _ => self.lines.len(),
        }
    }

    /// The trimmed comment on a 1-based line.
    pub fn comment_at(&self, line: usize) -> Result<&str, DriftReason> {
        let text = self.line(line)?;
        split_comment(text)
            .map(|(_, comment)| comment.trim())
            .filter(|comment| !comment.is_empty())
            .ok_or(DriftReason::NoComment)
    }

    /// Replace the comment on a 1-based line, keeping the code before the
    /// marker and the whitespace around the comment text.
    pub fn replace_comment(&mut self, line: usize, translation: &str) -> Result<(), DriftReason> {
        let current = self.line(line)?;
        let replaced = replace_comment_text(current, translation).ok_or(DriftReason::NoComment)?;
        self.lines[line - 1] = replaced;
        Ok(())
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn line(&self, line: usize) -> Result<&str, DriftReason> {
        let line_count = self.line_count();
        if line == 0 || line > line_count {
            return Err(DriftReason::LineOutOfRange { line_count });
        }
        Ok(&self.lines[line - 1])
    }
}

fn replace_comment_text(line: &str, translation: &str) -> Option<String> {
    let (code, comment) = split_comment(line)?;
    let body = comment.trim_start();
    let leading = &comment[..comment.len() - body.len()];
    let text = body.trim_end();
    if text.is_empty() {
        return None;
    }
    let trailing = &body[text.len()..];

    // A multi-line translation would shift every following line.
    let translation = translation.split_whitespace().collect::<Vec<_>>().join(" ");

    Some(format!("{code}{leading}{translation}{trailing}"))
}
