//! Configuration module for nb-to-blog
//!
//! Configuration hierarchy:
//! 1. Environment variables (NB_TO_BLOG_*) (highest priority)
//! 2. Explicit `--config` file, or `nb-to-blog.toml` in the project root
//! 3. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NbBlogError, NbBlogResult};

/// File name looked up in the project root when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "nb-to-blog.toml";

/// External notebook-to-markdown converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_program")]
    pub program: String,

    /// Arguments placed before the notebook path
    #[serde(default = "default_converter_args")]
    pub args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: default_converter_args(),
        }
    }
}

fn default_converter_program() -> String {
    "jupyter".to_string()
}

fn default_converter_args() -> Vec<String> {
    vec![
        "nbconvert".to_string(),
        "--to".to_string(),
        "markdown".to_string(),
    ]
}

/// Destination layout, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Site output directory holding `_posts/` and the asset tree
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Public URL prefix of post images; also their location under `output_dir`
    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,

    /// Folder next to the notebook holding standalone images
    #[serde(default = "default_static_images_dir")]
    pub static_images_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            image_url_prefix: default_image_url_prefix(),
            static_images_dir: default_static_images_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "_output".to_string()
}

fn default_image_url_prefix() -> String {
    "assets/img/blog".to_string()
}

fn default_static_images_dir() -> String {
    "images".to_string()
}

/// Junk line removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Lines containing any of these are dropped from the post
    #[serde(default = "default_junk_markers")]
    pub junk_markers: Vec<String>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            junk_markers: default_junk_markers(),
        }
    }
}

/// tqdm progress bars leave their widget repr behind in converted output
fn default_junk_markers() -> Vec<String> {
    vec!["HBox(children=(FloatProgress(".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub sanitize: SanitizeConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NbBlogResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NbBlogResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| NbBlogError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist; the project-root file is optional. A file
    /// that exists but does not parse is an error in both cases.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> NbBlogResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = match explicit {
            Some(path) => Self::load_with_warnings(path)?,
            None => {
                let project_config = project_root.join(CONFIG_FILE_NAME);
                if project_config.is_file() {
                    Self::load_with_warnings(&project_config)?
                } else {
                    (Self::default(), Vec::new())
                }
            }
        };

        Ok((config.with_env_overrides(), warnings))
    }

    /// Apply environment variable overrides (NB_TO_BLOG_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        // NB_TO_BLOG_CONVERTER
        if let Ok(program) = std::env::var("NB_TO_BLOG_CONVERTER") {
            if !program.trim().is_empty() {
                self.converter.program = program;
            }
        }

        // NB_TO_BLOG_OUTPUT_DIR
        if let Ok(dir) = std::env::var("NB_TO_BLOG_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.layout.output_dir = dir;
            }
        }

        self
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "converter",
        "program",
        "args",
        "layout",
        "output_dir",
        "image_url_prefix",
        "static_images_dir",
        "sanitize",
        "junk_markers",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
