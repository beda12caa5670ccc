//! nb-to-blog CLI - convert a Jupyter notebook into a blog post
//!
//! Usage: nb-to-blog [OPTIONS] <NOTEBOOK>

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use nb_to_blog::config::Config;
use nb_to_blog::post::plan::project_root;
use nb_to_blog::post::{convert_notebook, PostOptions, PostResult};
use nb_to_blog::{logging, resolve_notebook};

/// nb-to-blog - convert a Jupyter notebook into a static-site blog post
#[derive(Parser, Debug)]
#[command(name = "nb-to-blog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the notebook (.ipynb)
    notebook: PathBuf,

    /// Config file (defaults to nb-to-blog.toml in the project root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary instead of text
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    cmd_convert(&cli.notebook, cli.config.as_deref(), cli.json)
}

fn cmd_convert(notebook: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let notebook = resolve_notebook(notebook)?;

    let root = project_root(&notebook)?;
    let (config, warnings) = Config::resolve(config_path, root)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    if !json {
        println!("📓 nb-to-blog");
        println!("Notebook: {}", notebook.display());
    }

    let options = PostOptions {
        quiet: json,
        ..PostOptions::new(&notebook, config)
    };
    let result = convert_notebook(&options)?;

    if json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }

    Ok(())
}

fn print_json(result: &PostResult) -> Result<()> {
    let output = serde_json::json!({
        "event": "convert",
        "status": "success",
        "post_id": result.post_id,
        "date": result.date,
        "post": result.post_path.display().to_string(),
        "assets": result.asset_dir.display().to_string(),
        "generated_images": result.generated_assets.is_some(),
        "imported_images": result.imported_images,
        "removed_lines": result.removed_lines,
    });
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_text(result: &PostResult) {
    println!("\n✓ Post: {}", result.post_path.display());
    println!("✓ Assets: {}", result.asset_dir.display());
    if let Some(generated) = &result.generated_assets {
        println!("  - generated images: {}", generated.display());
    }
    if result.imported_images > 0 {
        println!("  - imported images: {}", result.imported_images);
    }
    if result.removed_lines > 0 {
        println!("  - removed junk lines: {}", result.removed_lines);
    }
    println!();
}
