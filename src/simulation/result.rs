//! Per-run simulation results

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::chart::CountCurves;
use super::state::{PersonState, StateCounts};
use crate::error::{NbBlogError, NbBlogResult};

/// Neighborhood identifier; opaque to reporting
pub type HoodId = u32;

/// One day's counts per neighborhood, ordered by neighborhood id
pub type HoodCounts = BTreeMap<HoodId, StateCounts>;

/// One simulated person on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub hood_id: HoodId,
    pub state: PersonState,
}

impl PersonRecord {
    pub fn new(hood_id: HoodId, state: PersonState) -> Self {
        Self { hood_id, state }
    }
}

/// Statistics computed once all days are in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub num_deceased: u64,
    pub peak_infected: u64,
    pub total_affected: u64,
    /// Whole-population counts, one row per day
    pub overall_counts: Vec<StateCounts>,
}

/// Results of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub pop_size: u64,
    pub n_days: u32,
    pub travel_restriction_day: Option<u32>,
    pub social_distancing_day: Option<u32>,
    daily_counts_per_hood: Vec<HoodCounts>,
    summary: Option<Summary>,
}

impl SimulationResult {
    pub fn new(
        pop_size: u64,
        n_days: u32,
        travel_restriction_day: Option<u32>,
        social_distancing_day: Option<u32>,
    ) -> Self {
        Self {
            pop_size,
            n_days,
            travel_restriction_day,
            social_distancing_day,
            daily_counts_per_hood: Vec::new(),
            summary: None,
        }
    }

    /// Aggregate one day's records into per-neighborhood counts and append them.
    ///
    /// Every neighborhood row carries all four states, zero where nobody was
    /// in that state. A finalized result is read-only.
    pub fn add_day_results(&mut self, records: &[PersonRecord]) -> NbBlogResult<&HoodCounts> {
        if self.summary.is_some() {
            return Err(NbBlogError::AlreadyFinalized {
                label: self.to_string(),
            });
        }

        let mut counts = HoodCounts::new();
        for record in records {
            counts.entry(record.hood_id).or_default().add(record.state, 1);
        }
        self.daily_counts_per_hood.push(counts);
        Ok(&self.daily_counts_per_hood[self.daily_counts_per_hood.len() - 1])
    }

    /// Per-neighborhood tables, indexed by day
    pub fn daily_counts_per_hood(&self) -> &[HoodCounts] {
        &self.daily_counts_per_hood
    }

    /// Compute summary statistics from the accumulated days.
    ///
    /// Calling it again recomputes from the same data.
    pub fn finalize(&mut self) -> NbBlogResult<&Summary> {
        let overall_counts: Vec<StateCounts> = self
            .daily_counts_per_hood
            .iter()
            .map(|day| day.values().sum())
            .collect();

        let last_day = overall_counts.last().ok_or_else(|| NbBlogError::NoDailyResults {
            label: self.to_string(),
        })?;

        let summary = Summary {
            num_deceased: last_day.deceased,
            total_affected: self.pop_size.saturating_sub(last_day.untouched),
            peak_infected: overall_counts.iter().map(|c| c.infected).max().unwrap_or(0),
            overall_counts,
        };

        let summary = self.summary.insert(summary);
        tracing::debug!(
            deceased = summary.num_deceased,
            peak_infected = summary.peak_infected,
            total_affected = summary.total_affected,
            "finalized simulation result"
        );

        Ok(&*summary)
    }

    /// `None` until [`finalize`](Self::finalize) has run
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub(crate) fn require_summary(&self) -> NbBlogResult<&Summary> {
        self.summary.as_ref().ok_or_else(|| NbBlogError::NotFinalized {
            label: self.to_string(),
        })
    }

    pub fn num_deceased(&self) -> Option<u64> {
        self.summary().map(|s| s.num_deceased)
    }

    pub fn peak_infected(&self) -> Option<u64> {
        self.summary().map(|s| s.peak_infected)
    }

    pub fn total_affected(&self) -> Option<u64> {
        self.summary().map(|s| s.total_affected)
    }

    pub fn overall_counts(&self) -> Option<&[StateCounts]> {
        self.summary().map(|s| s.overall_counts.as_slice())
    }

    fn percentage(&self, value: u64) -> f64 {
        if self.pop_size == 0 {
            return 0.0;
        }
        value as f64 / self.pop_size as f64 * 100.0
    }

    pub fn perc_deceased(&self) -> Option<f64> {
        self.num_deceased().map(|v| self.percentage(v))
    }

    pub fn perc_peak_infected(&self) -> Option<f64> {
        self.peak_infected().map(|v| self.percentage(v))
    }

    pub fn perc_total_affected(&self) -> Option<f64> {
        self.total_affected().map(|v| self.percentage(v))
    }

    /// Four-line report of population and outcome statistics
    pub fn summary_text(&self) -> NbBlogResult<String> {
        let s = self.require_summary()?;
        let row = |label: &str, value: u64| {
            format!(
                "{:<16}{:>10} ({:4.1} %)",
                label,
                group_thousands(value),
                self.percentage(value)
            )
        };

        Ok([
            format!("{:<16}{:>10}", "Population:", group_thousands(self.pop_size)),
            row("Deceased:", s.num_deceased),
            row("Peak infected:", s.peak_infected),
            row("Total affected:", s.total_affected),
        ]
        .join("\n"))
    }

    pub fn print_summary(&self) -> NbBlogResult<()> {
        println!("{}", self.summary_text()?);
        Ok(())
    }

    /// Chart description of the daily overall counts
    pub fn count_curves(&self, log: bool) -> NbBlogResult<CountCurves> {
        let summary = self.require_summary()?;
        Ok(CountCurves::build(self, &summary.overall_counts, log))
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimulationResult(n_days={}, tr_day={}, sd_day={})",
            self.n_days,
            OptDay(self.travel_restriction_day),
            OptDay(self.social_distancing_day)
        )
    }
}

struct OptDay(Option<u32>);

impl fmt::Display for OptDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(day) => write!(f, "{}", day),
            None => f.write_str("None"),
        }
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
