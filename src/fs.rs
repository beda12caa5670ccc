//! File system helpers
//!
//! Atomic writes, moves that survive crossing file systems, and directory
//! copies used by the post pipeline.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::NbBlogResult;

/// Write content to a file atomically
///
/// Uses tempfile + rename so readers never observe a half-written file.
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> NbBlogResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Move a file or directory, replacing an existing destination file.
///
/// Falls back to copy + delete when `rename` fails, e.g. across mount points.
pub fn move_path(from: &Path, to: &Path) -> NbBlogResult<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(
                from = %from.display(),
                to = %to.display(),
                error = %rename_err,
                "rename failed, copying instead"
            );
            if from.is_dir() {
                copy_dir_all(from, to)?;
                fs::remove_dir_all(from)?;
            } else {
                fs::copy(from, to)?;
                fs::remove_file(from)?;
            }
            Ok(())
        }
    }
}

/// Copy a file or a whole directory tree to `to`, overwriting files.
pub fn copy_entry(from: &Path, to: &Path) -> NbBlogResult<()> {
    if from.is_dir() {
        copy_dir_all(from, to)
    } else {
        fs::copy(from, to)?;
        Ok(())
    }
}

fn copy_dir_all(from: &Path, to: &Path) -> NbBlogResult<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
