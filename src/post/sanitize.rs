//! Junk line removal

use std::fs;
use std::path::Path;

use crate::error::NbBlogResult;
use crate::fs::atomic_write;

/// Drop every line containing one of `markers`; other lines are kept
/// byte-for-byte, line endings included.
pub fn strip_junk_lines<S: AsRef<str>>(text: &str, markers: &[S]) -> (String, usize) {
    let mut removed = 0;
    let kept: String = text
        .split_inclusive('\n')
        .filter(|line| {
            let junk = markers
                .iter()
                .any(|m| !m.as_ref().is_empty() && line.contains(m.as_ref()));
            if junk {
                removed += 1;
            }
            !junk
        })
        .collect();
    (kept, removed)
}

/// Sanitize a file in place. Returns the number of removed lines.
pub fn sanitize_file<S: AsRef<str>>(path: &Path, markers: &[S]) -> NbBlogResult<usize> {
    let contents = fs::read_to_string(path)?;
    let (kept, removed) = strip_junk_lines(&contents, markers);
    if removed > 0 {
        atomic_write(path, kept.as_bytes())?;
    }
    tracing::info!(removed, path = %path.display(), "sanitized post");
    Ok(removed)
}
