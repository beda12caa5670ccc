//! Destination planning
//!
//! Derives the post identifier and the output layout for a notebook, and
//! refuses to continue when the per-post asset directory already exists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::error::{NbBlogError, NbBlogResult};

/// Where a post and its images end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLayout {
    /// `<date>-<project name>`, used as file stem and asset folder name
    pub post_id: String,
    /// Directory holding the notebook
    pub project_dir: PathBuf,
    /// Shared posts directory, accumulates across runs
    pub posts_dir: PathBuf,
    /// Per-post asset directory, must not exist before the run
    pub asset_dir: PathBuf,
    /// Public URL of `asset_dir`, e.g. `/assets/img/blog/2020-03-15-post`
    pub asset_url: String,
}

impl PostLayout {
    /// Final location of the converted markdown
    pub fn post_path(&self) -> PathBuf {
        self.posts_dir.join(format!("{}.md", self.post_id))
    }
}

/// Directory holding the notebook
pub fn project_dir(notebook: &Path) -> NbBlogResult<&Path> {
    notebook
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| NbBlogError::InvalidProjectDir {
            path: notebook.to_path_buf(),
        })
}

/// Blog root: the parent of the project directory
pub fn project_root(notebook: &Path) -> NbBlogResult<&Path> {
    project_dir(notebook)?
        .parent()
        .ok_or_else(|| NbBlogError::InvalidProjectDir {
            path: notebook.to_path_buf(),
        })
}

/// Build the post identifier from the date token and the project directory name
pub fn post_id(date: &str, project_dir: &Path) -> NbBlogResult<String> {
    let name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NbBlogError::InvalidProjectDir {
            path: project_dir.to_path_buf(),
        })?;
    Ok(format!("{}-{}", date, name))
}

/// Compute the layout without touching the file system.
pub fn layout_for(notebook: &Path, date: &str, config: &LayoutConfig) -> NbBlogResult<PostLayout> {
    let project_dir = project_dir(notebook)?;
    let root = project_root(notebook)?;
    let post_id = post_id(date, project_dir)?;

    let output_dir = root.join(&config.output_dir);
    let prefix = config.image_url_prefix.trim_matches('/');

    Ok(PostLayout {
        posts_dir: output_dir.join("_posts"),
        asset_dir: output_dir.join(prefix).join(&post_id),
        asset_url: format!("/{}/{}", prefix, post_id),
        project_dir: project_dir.to_path_buf(),
        post_id,
    })
}

/// Create the posts directory and the asset parent, then check for conflicts.
///
/// The asset directory itself is left for later stages to create.
pub fn plan_destination(
    notebook: &Path,
    date: &str,
    config: &LayoutConfig,
) -> NbBlogResult<PostLayout> {
    let layout = layout_for(notebook, date, config)?;

    fs::create_dir_all(&layout.posts_dir)?;
    if let Some(parent) = layout.asset_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    if layout.asset_dir.exists() {
        tracing::warn!(path = %layout.asset_dir.display(), "asset directory already exists, aborting");
        return Err(NbBlogError::DestinationExists {
            path: layout.asset_dir.clone(),
        });
    }

    tracing::debug!(
        post_id = %layout.post_id,
        posts_dir = %layout.posts_dir.display(),
        asset_dir = %layout.asset_dir.display(),
        "planned destination"
    );

    Ok(layout)
}
