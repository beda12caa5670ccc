//! Common test utilities for nb-to-blog CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated blog root with a project directory and a fake converter
//! - Fixtures: notebook builders and converter output

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
