//! Notebook to blog post conversion
//!
//! Stages run strictly in order, each acting on the file system:
//!
//! 1. read the date from the notebook's first cell ([`crate::notebook`])
//! 2. plan the destination and refuse existing output ([`plan`])
//! 3. run the external converter ([`convert`])
//! 4. move its output into place ([`relocate`])
//! 5. rewrite image references ([`rewrite`])
//! 6. import standalone images ([`assets`])
//! 7. strip junk lines ([`sanitize`])
//!
//! Nothing is rolled back when a later stage fails.

pub mod assets;
pub mod convert;
pub mod plan;
pub mod relocate;
pub mod rewrite;
pub mod sanitize;

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::NbBlogResult;
use crate::notebook::read_post_date;

pub use convert::{run_converter, ConverterOutput};
pub use plan::{plan_destination, PostLayout};
pub use relocate::{relocate_output, Relocated};
pub use rewrite::ReferenceRewriter;

/// Options for converting one notebook
#[derive(Debug, Clone)]
pub struct PostOptions {
    /// Canonical path to the `.ipynb` file, as returned by
    /// [`resolve_notebook`](crate::notebook::resolve_notebook)
    pub notebook: PathBuf,
    /// Resolved configuration
    pub config: Config,
    /// Silence converter stdout (JSON mode)
    pub quiet: bool,
}

impl PostOptions {
    pub fn new(notebook: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            notebook: notebook.into(),
            config,
            quiet: false,
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResult {
    pub post_id: String,
    pub date: String,
    pub post_path: PathBuf,
    pub asset_dir: PathBuf,
    /// Generated image folder, if the notebook embedded images
    pub generated_assets: Option<PathBuf>,
    pub imported_images: usize,
    pub removed_lines: usize,
    /// Whether reference rewriting changed the document
    pub rewritten: bool,
}

/// Convert a resolved notebook into a post.
pub fn convert_notebook(options: &PostOptions) -> NbBlogResult<PostResult> {
    let config = &options.config;
    let notebook = options.notebook.as_path();

    let date = read_post_date(notebook)?;
    tracing::info!(date = %date, notebook = %notebook.display(), "read post date");

    let layout = plan_destination(notebook, &date, &config.layout)?;
    tracing::info!(post_id = %layout.post_id, "planned post");

    let output = run_converter(&config.converter, notebook, options.quiet)?;

    let relocated = relocate_output(&output, &layout)?;

    let rewriter = ReferenceRewriter::new(
        &config.layout.static_images_dir,
        &convert::generated_assets_dir_name(notebook),
        &layout.asset_url,
    );
    let rewritten = rewriter.rewrite_file(&relocated.post_path)?;

    let imported = assets::import_static_images(
        &layout.project_dir,
        &config.layout.static_images_dir,
        &layout.asset_dir,
    )?;

    let removed_lines =
        sanitize::sanitize_file(&relocated.post_path, config.sanitize.junk_markers.as_slice())?;

    Ok(PostResult {
        post_id: layout.post_id.clone(),
        date,
        post_path: relocated.post_path,
        asset_dir: layout.asset_dir.clone(),
        generated_assets: relocated.generated_assets,
        imported_images: imported.len(),
        removed_lines,
        rewritten,
    })
}
