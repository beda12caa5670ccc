//! Moves converter output into the site layout.

use std::fs;
use std::path::PathBuf;

use super::convert::ConverterOutput;
use super::plan::PostLayout;
use crate::error::{NbBlogError, NbBlogResult};
use crate::fs::move_path;

/// Where the converter output ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocated {
    pub post_path: PathBuf,
    pub generated_assets: Option<PathBuf>,
}

/// Move the markdown into the posts directory and the generated image folder
/// under the asset directory, keeping its folder name.
///
/// The asset directory is created here even when the converter produced no
/// images, so a second run for the same post is always refused by the planner.
pub fn relocate_output(output: &ConverterOutput, layout: &PostLayout) -> NbBlogResult<Relocated> {
    if !output.markdown.is_file() {
        return Err(NbBlogError::MissingConverterOutput {
            path: output.markdown.clone(),
        });
    }

    let post_path = layout.post_path();
    move_path(&output.markdown, &post_path)?;
    tracing::debug!(from = %output.markdown.display(), to = %post_path.display(), "moved post");

    fs::create_dir_all(&layout.asset_dir)?;

    let generated_assets = match &output.assets {
        Some(assets) => {
            if !assets.is_dir() {
                return Err(NbBlogError::MissingConverterOutput {
                    path: assets.clone(),
                });
            }
            let name = assets
                .file_name()
                .ok_or_else(|| NbBlogError::MissingConverterOutput {
                    path: assets.clone(),
                })?;
            let target = layout.asset_dir.join(name);
            move_path(assets, &target)?;
            tracing::debug!(from = %assets.display(), to = %target.display(), "moved generated images");
            Some(target)
        }
        None => None,
    };

    Ok(Relocated {
        post_path,
        generated_assets,
    })
}
