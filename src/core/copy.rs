use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::error::{Error, Result};

/// Copy `source` into a new directory `dest`, preserving relative structure.
///
/// `dest` must not exist and must not lie inside `source`. Files listed in
/// `exclude` are not copied. Returns the number of files copied.
pub fn copy_tree(source: &Path, dest: &Path, exclude: &[PathBuf]) -> Result<usize> {
    if !source.exists() {
        return Err(Error::PathNotFound(source.to_path_buf()));
    }
    if dest.exists() {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }
    if std::path::absolute(dest)?.starts_with(std::path::absolute(source)?) {
        return Err(Error::DestinationInsideSource(dest.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        let target = match path.strip_prefix(source) {
            Ok(relative) => dest.join(relative),
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if path.is_file() && !exclude.iter().any(|e| e == path) {
            fs::copy(path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
