use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::error::{Error, Result};
use super::locator::relative_path;

pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "h"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of walking a source tree.
#[derive(Debug, Default)]
pub struct WalkResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Enumerate source files under `root` whose extension is in `extensions`.
///
/// Ignore patterns are matched against the `/`-separated path relative to
/// `root`; literal patterns exclude everything under that path. The order of
/// the result is stable across runs on an unchanged tree.
pub fn enumerate(
    root: &Path,
    extensions: &[String],
    ignores: &[String],
    verbose: bool,
) -> Result<WalkResult> {
    if !root.exists() {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut result = WalkResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let relative = relative_path(root, path);
        if glob_patterns.iter().any(|p| p.matches(&relative)) {
            continue;
        }

        if path.is_file() && has_source_extension(path, extensions) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    Ok(result)
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
