//! Error types for nb-to-blog
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nb-to-blog operations
pub type NbBlogResult<T> = Result<T, NbBlogError>;

/// Main error type for nb-to-blog operations
///
/// Every variant is fatal to the run that produced it; none triggers cleanup
/// of partially written output.
#[derive(Error, Debug)]
pub enum NbBlogError {
    /// Notebook path does not carry exactly the `.ipynb` extension
    #[error("must pass a .ipynb file, got {path}")]
    NotANotebook { path: PathBuf },

    /// Notebook path does not exist
    #[error("notebook not found: {path}")]
    NotebookNotFound { path: PathBuf },

    /// Notebook directory cannot serve as a post project directory
    #[error("cannot derive a project directory from {path}")]
    InvalidProjectDir { path: PathBuf },

    /// Notebook has no cells to read metadata from
    #[error("notebook {file} has no cells")]
    EmptyNotebook { file: PathBuf },

    /// No line starting with `date` in the first cell
    #[error("no line starting with 'date' in the first cell of {file}")]
    MissingDateLine { file: PathBuf },

    /// More than one line starting with `date` in the first cell
    #[error("found {count} lines starting with 'date' in the first cell of {file}, expected exactly one")]
    DuplicateDateLine { file: PathBuf, count: usize },

    /// Date line present but its value is not a `YYYY-MM-DD` date
    #[error("could not parse a date from '{line}' in {file}")]
    InvalidDate { file: PathBuf, line: String },

    /// Per-post asset directory already exists from an earlier run
    #[error("{path} already exists, aborting")]
    DestinationExists { path: PathBuf },

    /// Converter could not be started
    #[error("failed to run converter '{program}': {message}")]
    ConverterSpawn { program: String, message: String },

    /// Converter exited with a non-zero status
    #[error("converter '{program}' returned with non-zero exit code {code:?}, aborting")]
    ConverterFailed { program: String, code: Option<i32> },

    /// Converter finished but the expected output is absent
    #[error("expected converter output not found: {path}")]
    MissingConverterOutput { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Simulation summary requested before `finalize`
    #[error("simulation result '{label}' has not been finalized")]
    NotFinalized { label: String },

    /// `finalize` called without any daily results
    #[error("simulation result '{label}' has no daily results")]
    NoDailyResults { label: String },

    /// Daily results added after `finalize`
    #[error("simulation result '{label}' is finalized, no more days can be added")]
    AlreadyFinalized { label: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
