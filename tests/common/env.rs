//! Test environment builder for isolated nb-to-blog runs.
//!
//! Provides `TestEnv` - a temp blog root holding one project directory with a
//! notebook, plus a config pointing the converter at a shell script.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{notebook_json, FAKE_CONVERTER, FIRST_CELL};

/// Project directory name used by default
pub const PROJECT: &str = "covid-sim";

/// Result of running the nb-to-blog CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated blog root
pub struct TestEnv {
    /// Temporary directory; kept alive for the test's duration
    _dir: TempDir,
    /// Canonical blog root path
    pub root: PathBuf,
}

impl TestEnv {
    /// Blog root with the fake converter configured and no project yet
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();

        let script = root.join("fake-nbconvert.sh");
        fs::write(&script, FAKE_CONVERTER).unwrap();
        Self::write_config_for(&root, "sh", &[script.to_str().unwrap()]);

        Self { _dir: dir, root }
    }

    /// Blog root with `covid-sim/analysis.ipynb` and one standalone image
    pub fn with_post() -> Self {
        let env = Self::new();
        env.write_notebook(PROJECT, "analysis.ipynb", FIRST_CELL);
        env.write_image(PROJECT, "map.png", "map");
        env
    }

    fn write_config_for(root: &Path, program: &str, args: &[&str]) {
        let args: Vec<String> = args.iter().map(|a| format!("{:?}", a)).collect();
        fs::write(
            root.join("nb-to-blog.toml"),
            format!(
                "[converter]\nprogram = {:?}\nargs = [{}]\n",
                program,
                args.join(", ")
            ),
        )
        .unwrap();
    }

    /// Replace the converter command
    pub fn set_converter(&self, program: &str, args: &[&str]) {
        Self::write_config_for(&self.root, program, args);
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write_notebook(&self, project: &str, name: &str, first_cell: &[&str]) -> PathBuf {
        let dir = self.root.join(project);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, notebook_json(first_cell)).unwrap();
        path
    }

    pub fn write_image(&self, project: &str, name: &str, content: &str) {
        let dir = self.root.join(project).join("images");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    /// Number of times the fake converter ran
    pub fn converter_calls(&self) -> usize {
        fs::read_to_string(self.root.join("converter-calls.log"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    /// Run the CLI with the blog root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_nb-to-blog"))
            .args(args)
            .current_dir(&self.root)
            .env_remove("NB_TO_BLOG_CONVERTER")
            .env_remove("NB_TO_BLOG_OUTPUT_DIR")
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
