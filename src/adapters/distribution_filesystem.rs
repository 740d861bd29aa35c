use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;

/// Result of a guarded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Every file below `root`, as sorted paths relative to `root`.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    collect_into(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect_into(root, &path, files)?;
            continue;
        }
        // Symlinked directories are not descended into.
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if is_file && let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(())
}

/// Write `content` to `dest`, creating parent folders.
pub fn write_file(dest: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)?;
    info!("Wrote {}", dest.display());
    Ok(())
}

/// Write `content` to `dest` unless the file exists and `overwrite` is off.
pub fn write_guarded(dest: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome, AppError> {
    if dest.exists() {
        if !overwrite {
            info!("File {} exists, not overwriting", dest.display());
            return Ok(WriteOutcome::Skipped);
        }
        info!("Overwriting existing file {}", dest.display());
        write_file(dest, content)?;
        return Ok(WriteOutcome::Overwritten);
    }

    write_file(dest, content)?;
    Ok(WriteOutcome::Created)
}

/// Delete a previously rendered output folder.
pub fn remove_dir(path: &Path) -> Result<(), AppError> {
    info!("Removing existing distribution folder {}", path.display());
    fs::remove_dir_all(path)?;
    Ok(())
}
