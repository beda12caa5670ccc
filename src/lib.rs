//! nb-to-blog - notebook to blog post converter
//!
//! Turns a Jupyter notebook into a static-site blog post: the external
//! converter produces markdown, which is moved into the site's `_posts`
//! directory with its images, image references rewritten to public URLs and
//! progress-bar junk stripped.
//!
//! The [`simulation`] module carries the reporting side of an agent-based
//! epidemic simulation whose write-ups are published with this tool.

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod notebook;
pub mod post;
pub mod simulation;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{NbBlogError, NbBlogResult};
pub use notebook::{extract_date, read_post_date, resolve_notebook, validate_notebook_path};
pub use post::sanitize::strip_junk_lines;
pub use post::{convert_notebook, PostOptions, PostResult, ReferenceRewriter};
pub use simulation::{PersonRecord, PersonState, SimulationResult, SimulationResultStorage};
