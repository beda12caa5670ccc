//! Standalone image import

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NbBlogResult;
use crate::fs::copy_entry;

/// Copy every top-level entry of `<project_dir>/<static_dir>` into `asset_dir`.
///
/// A missing source folder is not an error. Existing files with the same name
/// are overwritten. Returns the destination paths in name order.
pub fn import_static_images(
    project_dir: &Path,
    static_dir: &str,
    asset_dir: &Path,
) -> NbBlogResult<Vec<PathBuf>> {
    let source = project_dir.join(static_dir);
    if !source.is_dir() {
        tracing::debug!(path = %source.display(), "no standalone images folder");
        return Ok(Vec::new());
    }

    fs::create_dir_all(asset_dir)?;

    let mut entries = fs::read_dir(&source)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut imported = Vec::with_capacity(entries.len());
    for entry in entries {
        let target = asset_dir.join(entry.file_name());
        copy_entry(&entry.path(), &target)?;
        imported.push(target);
    }

    tracing::info!(count = imported.len(), "imported standalone images");
    Ok(imported)
}
