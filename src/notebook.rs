//! Notebook reader
//!
//! Validates the notebook path and extracts the publication date from the
//! first cell. A post's first cell carries its metadata as plain lines:
//!
//! ```text
//! # Title of the post
//! date: 2020-03-15
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::error::{NbBlogError, NbBlogResult};

/// Canonical notebook extension, without the dot
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Lines carrying the publication date start with this token
const DATE_PREFIX: &str = "date";

static DATE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^date:\s*([0-9-]+)").expect("valid date regex"));

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    source: CellSource,
}

/// nbformat allows cell source as one string or a list of line strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl CellSource {
    fn into_lines(self) -> Vec<String> {
        let text = match self {
            CellSource::Text(text) => text,
            CellSource::Lines(lines) => lines.concat(),
        };
        text.lines().map(str::to_string).collect()
    }
}

/// Check that `path` exists and has exactly the `.ipynb` suffix.
///
/// `post.ipynb` passes; `post.old.ipynb`, `post.md` and `.ipynb` do not.
pub fn validate_notebook_path(path: &Path) -> NbBlogResult<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let suffixes: Vec<&str> = if name.ends_with('.') {
        Vec::new()
    } else {
        name.trim_start_matches('.').split('.').skip(1).collect()
    };

    if suffixes != [NOTEBOOK_EXTENSION] {
        return Err(NbBlogError::NotANotebook {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(NbBlogError::NotebookNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Validate a notebook path and return its canonical form.
pub fn resolve_notebook(path: &Path) -> NbBlogResult<PathBuf> {
    validate_notebook_path(path)?;
    Ok(fs::canonicalize(path)?)
}

/// Parse notebook JSON and return the first cell's source as lines.
pub fn first_cell_lines(content: &str, file: &Path) -> NbBlogResult<Vec<String>> {
    let notebook: Notebook = serde_json::from_str(content)?;
    let cell = notebook
        .cells
        .into_iter()
        .next()
        .ok_or_else(|| NbBlogError::EmptyNotebook {
            file: file.to_path_buf(),
        })?;
    Ok(cell.source.into_lines())
}

/// Extract the date token from the first cell's lines.
///
/// Exactly one line may start with `date`, and it must read
/// `date: YYYY-MM-DD`. The token is returned as written.
pub fn extract_date<S: AsRef<str>>(lines: &[S], file: &Path) -> NbBlogResult<String> {
    let date_lines: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line.starts_with(DATE_PREFIX))
        .collect();

    let line = match date_lines.as_slice() {
        [] => {
            return Err(NbBlogError::MissingDateLine {
                file: file.to_path_buf(),
            })
        }
        [line] => *line,
        many => {
            return Err(NbBlogError::DuplicateDateLine {
                file: file.to_path_buf(),
                count: many.len(),
            })
        }
    };

    let invalid = || NbBlogError::InvalidDate {
        file: file.to_path_buf(),
        line: line.to_string(),
    };

    let token = DATE_LINE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(invalid)?;

    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;

    Ok(token.to_string())
}

/// Read a notebook file and return its publication date token.
pub fn read_post_date(path: &Path) -> NbBlogResult<String> {
    let content = fs::read_to_string(path)?;
    let lines = first_cell_lines(&content, path)?;
    extract_date(&lines, path)
}
