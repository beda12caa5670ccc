//! External converter invocation
//!
//! Runs the notebook-to-markdown converter (`jupyter nbconvert` by default)
//! as a blocking subprocess. Success is judged by exit status alone.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ConverterConfig;
use crate::error::{NbBlogError, NbBlogResult};

/// Paths the converter is expected to produce, by naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOutput {
    /// `<notebook dir>/<stem>.md`
    pub markdown: PathBuf,
    /// `<notebook dir>/<stem>_files/`, present only if the notebook embeds images
    pub assets: Option<PathBuf>,
}

/// Name of the folder the converter writes embedded images into
pub fn generated_assets_dir_name(notebook: &Path) -> String {
    format!("{}_files", notebook_stem(notebook))
}

fn notebook_stem(notebook: &Path) -> String {
    notebook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expected output locations next to the notebook.
pub fn expected_outputs(notebook: &Path) -> (PathBuf, PathBuf) {
    let dir = notebook.parent().unwrap_or_else(|| Path::new("."));
    (
        dir.join(format!("{}.md", notebook_stem(notebook))),
        dir.join(generated_assets_dir_name(notebook)),
    )
}

/// Run the converter on `notebook` and report what it produced.
///
/// The converter's stderr is always passed through; stdout is silenced when
/// `quiet` is set so machine-readable output stays clean.
pub fn run_converter(
    config: &ConverterConfig,
    notebook: &Path,
    quiet: bool,
) -> NbBlogResult<ConverterOutput> {
    let mut cmd = Command::new(&config.program);
    cmd.args(&config.args).arg(notebook).stdin(Stdio::null());

    if quiet {
        cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    tracing::info!(program = %config.program, args = ?config.args, notebook = %notebook.display(), "running converter");

    let status = cmd.status().map_err(|e| NbBlogError::ConverterSpawn {
        program: config.program.clone(),
        message: e.to_string(),
    })?;

    if !status.success() {
        return Err(NbBlogError::ConverterFailed {
            program: config.program.clone(),
            code: status.code(),
        });
    }

    let (markdown, assets) = expected_outputs(notebook);
    let assets = if assets.is_dir() {
        Some(assets)
    } else {
        tracing::debug!(path = %assets.display(), "converter produced no asset directory");
        None
    };

    Ok(ConverterOutput { markdown, assets })
}
