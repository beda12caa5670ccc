//! Collections of simulation runs and their CSV export

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::ops::Index;
use std::path::{Path, PathBuf};

use super::result::{HoodCounts, SimulationResult};
use super::state::{PersonState, StateCounts};
use crate::error::NbBlogResult;
use crate::fs::atomic_write;

/// File holding the day-indexed whole-population counts of one run
pub const OVERALL_COUNTS_FILE: &str = "overall-counts.csv";

/// Runs keyed by their descriptive label
#[derive(Debug, Clone, Default)]
pub struct SimulationResultStorage {
    results: BTreeMap<String, SimulationResult>,
}

impl SimulationResultStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a run under its label, replacing a run with the same label.
    pub fn add(&mut self, result: SimulationResult) {
        self.results.insert(result.to_string(), result);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&SimulationResult> {
        self.results.get(key)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Write every run to `<base>/<label without spaces>/`.
    ///
    /// Each directory gets `overall-counts.csv` plus one
    /// `daily_counts_per_hood-dayNNN.csv` per day. Returns the run directories.
    /// Every run must be finalized.
    pub fn save(&self, base: &Path) -> NbBlogResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.results.len());

        for (key, result) in &self.results {
            let summary = result.require_summary()?;
            let dir = base.join(key.replace(' ', ""));
            std::fs::create_dir_all(&dir)?;

            atomic_write(
                &dir.join(OVERALL_COUNTS_FILE),
                overall_counts_csv(&summary.overall_counts).as_bytes(),
            )?;

            for (day, counts) in result.daily_counts_per_hood().iter().enumerate() {
                atomic_write(&dir.join(daily_file_name(day)), hood_counts_csv(counts).as_bytes())?;
            }

            tracing::info!(run = %key, dir = %dir.display(), "saved simulation result");
            written.push(dir);
        }

        Ok(written)
    }
}

impl Index<&str> for SimulationResultStorage {
    type Output = SimulationResult;

    fn index(&self, key: &str) -> &Self::Output {
        &self.results[key]
    }
}

impl fmt::Display for SimulationResultStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.keys().collect();
        write!(f, "SimulationResultStorage(\n    {}\n)", keys.join(",\n    "))
    }
}

/// `daily_counts_per_hood-day007.csv`
pub fn daily_file_name(day: usize) -> String {
    format!("daily_counts_per_hood-day{:03}.csv", day)
}

fn header(index: &str) -> String {
    let mut line = index.to_string();
    for state in PersonState::ALL {
        line.push(',');
        line.push_str(state.as_str());
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, index: impl fmt::Display, counts: &StateCounts) {
    let _ = write!(out, "{}", index);
    for (_, count) in counts.iter() {
        let _ = write!(out, ",{}", count);
    }
    out.push('\n');
}

fn overall_counts_csv(overall: &[StateCounts]) -> String {
    let mut out = header("day");
    for (day, counts) in overall.iter().enumerate() {
        push_row(&mut out, day, counts);
    }
    out
}

fn hood_counts_csv(counts: &HoodCounts) -> String {
    let mut out = header("hood_id");
    for (hood, counts) in counts {
        push_row(&mut out, hood, counts);
    }
    out
}
